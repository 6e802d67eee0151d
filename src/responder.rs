//! Bot replies: the "I don't understand" template and the jester's
//! randomized phrase compositions.

use serde::{Deserialize, Serialize};

use crate::alphabet::{AlphabetTable, LanguageProfile};
use crate::error::{ChatError, Result};
use crate::rng::RandomSource;

/// Reply used when the gamble lets the user's text through untouched.
pub const ACKNOWLEDGEMENT: &str = "I understand you! How can I help?";

/// How a reply is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPolicy {
    /// `"Sorry, I don't understand {language}"`.
    FixedTemplate,
    /// Random exclamation + random rebuke in a random sentence shape.
    RandomComposition,
}

/// Sentence shapes for [`ReplyPolicy::RandomComposition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    ReallyQuestion,
    BackAgain,
    ShoutedEcho,
    NoTime,
    SillyQuestion,
    LeaveMeAlone,
}

impl Template {
    pub const ALL: [Template; 6] = [
        Template::ReallyQuestion,
        Template::BackAgain,
        Template::ShoutedEcho,
        Template::NoTime,
        Template::SillyQuestion,
        Template::LeaveMeAlone,
    ];

    /// Fill in `{curse}`, `{insult}` and `{msg}`.
    pub fn render(self, curse: &str, insult: &str, msg: &str) -> String {
        match self {
            Template::ReallyQuestion => format!("{curse} {insult} {msg}? Really?!"),
            Template::BackAgain => format!("{insult} {curse} Back with this again!"),
            Template::ShoutedEcho => format!("{curse} {msg}?! {insult}"),
            Template::NoTime => format!("{insult} {curse} No time for such questions!"),
            Template::SillyQuestion => format!("{curse} What a silly question! {insult}"),
            Template::LeaveMeAlone => format!("{insult} {msg}?! {curse} Leave me alone!"),
        }
    }
}

/// Fragment pools for the jester. Both pools are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPhrasePools")]
pub struct PhrasePools {
    exclamations: Vec<String>,
    rebukes: Vec<String>,
}

#[derive(Deserialize)]
struct RawPhrasePools {
    exclamations: Vec<String>,
    rebukes: Vec<String>,
}

impl TryFrom<RawPhrasePools> for PhrasePools {
    type Error = ChatError;

    fn try_from(raw: RawPhrasePools) -> Result<Self> {
        PhrasePools::new(raw.exclamations, raw.rebukes)
    }
}

impl PhrasePools {
    pub fn new(exclamations: Vec<String>, rebukes: Vec<String>) -> Result<Self> {
        if exclamations.is_empty() {
            return Err(ChatError::config("phrase pool `exclamations` is empty"));
        }
        if rebukes.is_empty() {
            return Err(ChatError::config("phrase pool `rebukes` is empty"));
        }
        Ok(Self {
            exclamations,
            rebukes,
        })
    }

    pub fn exclamations(&self) -> &[String] {
        &self.exclamations
    }

    pub fn rebukes(&self) -> &[String] {
        &self.rebukes
    }
}

impl Default for PhrasePools {
    fn default() -> Self {
        let owned = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| s.to_string()).collect() };
        Self {
            exclamations: owned(&[
                "Good grief!",
                "Oh, for crying out loud!",
                "Great heavens!",
                "Blast it all!",
                "Sweet mother of pearl!",
                "Ugh, seriously?!",
            ]),
            rebukes: owned(&[
                "You absolute walnut.",
                "You soggy biscuit.",
                "You clueless pigeon.",
                "You overcooked noodle.",
                "You walking typo.",
                "You confused teapot.",
            ]),
        }
    }
}

/// Produces bot replies.
#[derive(Debug, Clone)]
pub struct Responder<'t> {
    table: &'t AlphabetTable,
    pools: PhrasePools,
}

impl<'t> Responder<'t> {
    pub fn new(table: &'t AlphabetTable, pools: PhrasePools) -> Self {
        Self { table, pools }
    }

    pub fn pools(&self) -> &PhrasePools {
        &self.pools
    }

    /// Build a reply to `user_text`.
    ///
    /// `profile` is the language the user's message was rewritten into; the
    /// fixed template draws a random one when it is absent. The randomized
    /// composition ignores it.
    pub fn generate(
        &self,
        user_text: &str,
        profile: Option<&LanguageProfile>,
        policy: ReplyPolicy,
        rng: &mut dyn RandomSource,
    ) -> String {
        match policy {
            ReplyPolicy::FixedTemplate => {
                let profile = match profile {
                    Some(p) => p,
                    None => self.table.choose(rng),
                };
                not_understood(profile)
            }
            ReplyPolicy::RandomComposition => self.compose(user_text, rng).1,
        }
    }

    /// Randomized composition, also returning the template used.
    pub fn compose(&self, user_text: &str, rng: &mut dyn RandomSource) -> (Template, String) {
        let template = Template::ALL[rng.index(Template::ALL.len())];
        let curse = &self.pools.exclamations[rng.index(self.pools.exclamations.len())];
        let insult = &self.pools.rebukes[rng.index(self.pools.rebukes.len())];
        (template, template.render(curse, insult, user_text))
    }
}

/// `"Sorry, I don't understand {display_name}"`.
pub fn not_understood(profile: &LanguageProfile) -> String {
    format!("Sorry, I don't understand {}", profile.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Language;
    use crate::rng::{FixedSource, RngSource, ScriptedSource};
    use crate::transliterate::transliterate;
    use std::collections::HashMap;

    fn responder() -> Responder<'static> {
        Responder::new(AlphabetTable::builtin(), PhrasePools::default())
    }

    // -- Fixed template ------------------------------------------------------

    #[test]
    fn test_fixed_template_after_greek() {
        let table = AlphabetTable::builtin();
        let mut rng = FixedSource(0.2);
        let (_, used) = transliterate("hello", table.get(Language::Greek), table, &mut rng);
        let reply = responder().generate("hello", Some(used), ReplyPolicy::FixedTemplate, &mut rng);
        assert_eq!(reply, "Sorry, I don't understand Greek");
    }

    #[test]
    fn test_fixed_template_without_profile_picks_one() {
        let reply = responder().generate("hi", None, ReplyPolicy::FixedTemplate, &mut FixedSource(0.0));
        assert_eq!(reply, "Sorry, I don't understand Chinese");
    }

    // -- Templates -----------------------------------------------------------

    #[test]
    fn test_template_shapes() {
        let r = |t: Template| t.render("C!", "I.", "m");
        assert_eq!(r(Template::ReallyQuestion), "C! I. m? Really?!");
        assert_eq!(r(Template::BackAgain), "I. C! Back with this again!");
        assert_eq!(r(Template::ShoutedEcho), "C! m?! I.");
        assert_eq!(r(Template::NoTime), "I. C! No time for such questions!");
        assert_eq!(r(Template::SillyQuestion), "C! What a silly question! I.");
        assert_eq!(r(Template::LeaveMeAlone), "I. m?! C! Leave me alone!");
    }

    #[test]
    fn test_compose_draw_order_template_then_fragments() {
        let pools = PhrasePools::new(
            vec!["A!".into(), "B!".into()],
            vec!["x.".into(), "y.".into()],
        )
        .unwrap();
        let responder = Responder::new(AlphabetTable::builtin(), pools);
        // template 0.0 → ReallyQuestion, curse 0.9 → "B!", insult 0.1 → "x."
        let mut rng = ScriptedSource::new(vec![0.0, 0.9, 0.1]);
        let (t, text) = responder.compose("why", &mut rng);
        assert_eq!(t, Template::ReallyQuestion);
        assert_eq!(text, "B! x. why? Really?!");
    }

    #[test]
    fn test_random_composition_contains_fragments() {
        let r = responder();
        let mut rng = RngSource::seeded(11);
        for _ in 0..50 {
            let reply = r.generate("ping", None, ReplyPolicy::RandomComposition, &mut rng);
            assert!(r.pools().exclamations().iter().any(|e| reply.contains(e.as_str())));
            assert!(r.pools().rebukes().iter().any(|e| reply.contains(e.as_str())));
        }
    }

    #[test]
    fn test_template_frequency_roughly_uniform() {
        let r = responder();
        let mut rng = RngSource::seeded(42);
        let n = 10_000;
        let mut counts: HashMap<Template, usize> = HashMap::new();
        for _ in 0..n {
            *counts.entry(r.compose("q", &mut rng).0).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = n as f64 / 6.0;
        for (t, c) in counts {
            // ~5 standard deviations for Binomial(10000, 1/6)
            assert!(
                (c as f64 - expected).abs() < 190.0,
                "{:?} drawn {} times, expected ~{}",
                t,
                c,
                expected
            );
        }
    }

    // -- Pools ---------------------------------------------------------------

    #[test]
    fn test_empty_exclamations_rejected() {
        let err = PhrasePools::new(vec![], vec!["x".into()]).unwrap_err();
        assert!(err.to_string().contains("exclamations"));
    }

    #[test]
    fn test_empty_rebukes_rejected() {
        let err = PhrasePools::new(vec!["x".into()], vec![]).unwrap_err();
        assert!(err.to_string().contains("rebukes"));
    }

    #[test]
    fn test_pools_deserialize_validates() {
        let ok: PhrasePools =
            serde_json::from_str(r#"{"exclamations":["Oi!"],"rebukes":["You."]}"#).unwrap();
        assert_eq!(ok.exclamations(), &["Oi!".to_string()]);
        let bad = serde_json::from_str::<PhrasePools>(r#"{"exclamations":[],"rebukes":["You."]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_default_pools_non_empty() {
        let p = PhrasePools::default();
        assert!(!p.exclamations().is_empty());
        assert!(!p.rebukes().is_empty());
    }
}
