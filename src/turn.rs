//! Turn controller: one submit event in, updated log out.
//!
//! ## Turn lifecycle
//! 1. Idle: the shell collects text and calls [`TurnController::handle_submit`].
//! 2. Processing: a blank or missing submission is a no-op; anything else
//!    produces exactly one user message and one bot reply.
//! 3. Rendered: the whole log is handed back together with an empty string
//!    for the input field, whether or not a turn happened.
//!
//! The call is synchronous, so Rendered → Idle is immediate.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alphabet::{AlphabetTable, Language, LanguageProfile};
use crate::conversation::{ConversationLog, Message};
use crate::error::{ChatError, Result};
use crate::responder::{not_understood, PhrasePools, ReplyPolicy, Responder, ACKNOWLEDGEMENT};
use crate::rng::RandomSource;
use crate::transliterate::transliterate;

/// Probability of transliterating in [`Mode::Gamble`] unless configured.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Which assistant the user is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rewrite every message and claim not to understand it.
    #[default]
    Transliterate,
    /// Keep the message, answer with a random jab.
    Jester,
    /// Coin flip per turn between `Transliterate` and a plain acknowledgement.
    Gamble,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Transliterate => write!(f, "transliterate"),
            Mode::Jester => write!(f, "jester"),
            Mode::Gamble => write!(f, "gamble"),
        }
    }
}

/// What the shell gets back after a submit event.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// The full log, not a delta.
    pub log: ConversationLog,
    /// Value to write back into the input field. Always empty.
    pub cleared_input: String,
    /// Whether a turn was appended.
    pub processed: bool,
}

#[derive(Debug, Clone)]
pub struct TurnController<'t> {
    table: &'t AlphabetTable,
    responder: Responder<'t>,
    mode: Mode,
    probability: f64,
    language: Option<&'t LanguageProfile>,
}

impl<'t> TurnController<'t> {
    pub fn new(table: &'t AlphabetTable, pools: PhrasePools, mode: Mode) -> Self {
        Self {
            table,
            responder: Responder::new(table, pools),
            mode,
            probability: DEFAULT_PROBABILITY,
            language: None,
        }
    }

    /// Set the gamble threshold; must lie in `[0, 1]`.
    pub fn with_probability(mut self, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ChatError::config(format!(
                "probability must be within [0, 1], got {p}"
            )));
        }
        self.probability = p;
        Ok(self)
    }

    /// Always rewrite into `language` instead of a random script.
    pub fn with_language(mut self, language: Language) -> Result<Self> {
        let profile = self.table.get(language).ok_or_else(|| ChatError::NotFound {
            id: language.id().to_string(),
        })?;
        self.language = Some(profile);
        Ok(self)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn language(&self) -> Option<&'t LanguageProfile> {
        self.language
    }

    pub fn table(&self) -> &'t AlphabetTable {
        self.table
    }

    /// Process one submit event.
    ///
    /// `submission` is `None` when the shell fires before the user ever
    /// pressed send. `None`, empty, and whitespace-only text leave the log
    /// untouched.
    pub fn handle_submit(
        &self,
        submission: Option<&str>,
        mut log: ConversationLog,
        rng: &mut dyn RandomSource,
    ) -> TurnOutcome {
        trace!(state = "processing", "submit received");
        let text = match submission {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                trace!(state = "rendered", "blank submission ignored");
                return TurnOutcome {
                    log,
                    cleared_input: String::new(),
                    processed: false,
                };
            }
        };

        let (user, bot) = match self.mode {
            Mode::Transliterate => self.garble(text, rng),
            Mode::Jester => {
                let reply = self
                    .responder
                    .generate(text, None, ReplyPolicy::RandomComposition, rng);
                debug!(mode = %self.mode, "jester reply");
                (Message::user(text), Message::bot(reply))
            }
            Mode::Gamble => {
                let roll = rng.unit();
                if roll < self.probability {
                    debug!(roll, p = self.probability, "gamble: transliterate");
                    self.garble(text, rng)
                } else {
                    debug!(roll, p = self.probability, "gamble: pass through");
                    (Message::user(text), Message::bot(ACKNOWLEDGEMENT))
                }
            }
        };
        log.push_turn(user, bot);
        trace!(state = "rendered", messages = log.len(), "turn appended");

        TurnOutcome {
            log,
            cleared_input: String::new(),
            processed: true,
        }
    }

    fn garble(&self, text: &str, rng: &mut dyn RandomSource) -> (Message, Message) {
        let (converted, used) = transliterate(text, self.language, self.table, rng);
        debug!(mode = %self.mode, language = %used.id(), "message transliterated");
        (
            Message::converted(converted, text),
            Message::bot(not_understood(used)),
        )
    }
}
