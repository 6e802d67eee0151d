//! Language profiles and the alphabet table they live in.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};
use crate::rng::RandomSource;

/// Scripts the assistant can "speak".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Chinese,
    Japanese,
    Korean,
    Russian,
    Greek,
    Georgian,
    Arabic,
    Thai,
    Hindi,
    Farsi,
    Romance,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Russian,
        Language::Greek,
        Language::Georgian,
        Language::Arabic,
        Language::Thai,
        Language::Hindi,
        Language::Farsi,
        Language::Romance,
    ];

    /// Stable lowercase key, e.g. `"greek"`.
    pub fn id(self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Russian => "russian",
            Language::Greek => "greek",
            Language::Georgian => "georgian",
            Language::Arabic => "arabic",
            Language::Thai => "thai",
            Language::Hindi => "hindi",
            Language::Farsi => "farsi",
            Language::Romance => "romance",
        }
    }

    /// Parse an id, ignoring case.
    pub fn from_str_loose(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|l| l.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChatError::NotFound { id: s.to_string() })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A named script and the glyphs used to imitate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    id: Language,
    display_name: String,
    flag: String,
    glyphs: Vec<char>,
}

impl LanguageProfile {
    /// Build a profile; fails if `glyphs` is empty.
    pub fn new(
        id: Language,
        display_name: impl Into<String>,
        flag: impl Into<String>,
        glyphs: &str,
    ) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(ChatError::config(format!(
                "alphabet for language `{}` is empty",
                id
            )));
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            flag: flag.into(),
            glyphs,
        })
    }

    pub fn id(&self) -> Language {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Substitution alphabet. Never empty.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Draw one glyph uniformly, with replacement.
    pub fn random_glyph(&self, rng: &mut dyn RandomSource) -> char {
        self.glyphs[rng.index(self.glyphs.len())]
    }
}

/// Immutable id → profile mapping, in declaration order.
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    profiles: Vec<LanguageProfile>,
}

impl AlphabetTable {
    /// Validate and freeze a set of profiles.
    ///
    /// Rejects an empty table and duplicate ids.
    pub fn from_profiles(profiles: Vec<LanguageProfile>) -> Result<Self> {
        if profiles.is_empty() {
            return Err(ChatError::config("alphabet table has no languages"));
        }
        for (i, p) in profiles.iter().enumerate() {
            if profiles[..i].iter().any(|q| q.id == p.id) {
                return Err(ChatError::config(format!(
                    "language `{}` is defined twice",
                    p.id
                )));
            }
        }
        Ok(Self { profiles })
    }

    /// Shared built-in table, constructed on first use.
    pub fn builtin() -> &'static AlphabetTable {
        &BUILTIN
    }

    /// Profile whose id matches `id`, ignoring ASCII case only.
    pub fn lookup(&self, id: &str) -> Result<&LanguageProfile> {
        self.profiles
            .iter()
            .find(|p| p.id.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| ChatError::NotFound { id: id.to_string() })
    }

    /// Profile for an enumerated id, if this table defines it.
    pub fn get(&self, id: Language) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Uniformly random profile.
    pub fn choose(&self, rng: &mut dyn RandomSource) -> &LanguageProfile {
        &self.profiles[rng.index(self.profiles.len())]
    }

    /// All flags concatenated, for banners.
    pub fn flags(&self) -> String {
        self.profiles.iter().map(|p| p.flag.as_str()).collect()
    }
}

const BUILTIN_PROFILES: &[(Language, &str, &str, &str)] = &[
    (
        Language::Chinese,
        "Chinese",
        "🇨🇳",
        "汉字文本转换示例这是一个测试消息请输入您的问题我们会尽快回复您感谢使用本系统",
    ),
    (
        Language::Japanese,
        "Japanese",
        "🇯🇵",
        "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん",
    ),
    (
        Language::Korean,
        "Korean",
        "🇰🇷",
        "가나다라마바사아자차카타파하거너더러머버서어저처커터퍼허고노도로모보소오조초코토포호",
    ),
    (
        Language::Russian,
        "Russian",
        "🇷🇺",
        "абвгдеёжзийклмнопрстуфхцчшщъыьэюя",
    ),
    (Language::Greek, "Greek", "🇬🇷", "αβγδεζηθικλμνξοπρστυφχψω"),
    (
        Language::Georgian,
        "Georgian",
        "🇬🇪",
        "აბგდევზთიკლმნოპჟრსტუფქღყშჩცძწჭხჯჰ",
    ),
    (Language::Arabic, "Arabic", "🇸🇦", "ابتثجحخدذرزسشصضطظعغفقكلمنهوي"),
    (
        Language::Thai,
        "Thai",
        "🇹🇭",
        "กขคฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรลวศษสหฬอฮ",
    ),
    (
        Language::Hindi,
        "Hindi",
        "🇮🇳",
        "अआइईउऊएऐओऔकखगघचछजझटठडढणतथदधनपफबभमयरलवशषसह",
    ),
    (
        Language::Farsi,
        "Farsi",
        "🇮🇷",
        "ابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی",
    ),
    (
        Language::Romance,
        "Romance",
        "🇫🇷",
        "abcdefghijklmnopqrstuvwxyzàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ",
    ),
];

fn builtin_profiles() -> Result<Vec<LanguageProfile>> {
    BUILTIN_PROFILES
        .iter()
        .map(|&(id, name, flag, glyphs)| LanguageProfile::new(id, name, flag, glyphs))
        .collect()
}

static BUILTIN: Lazy<AlphabetTable> = Lazy::new(|| {
    builtin_profiles()
        .and_then(AlphabetTable::from_profiles)
        .expect("built-in alphabet table is valid")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedSource, ScriptedSource};
    use rstest::rstest;

    // -- Built-in table ------------------------------------------------------

    #[test]
    fn test_builtin_has_every_language_in_order() {
        let ids: Vec<Language> = AlphabetTable::builtin().all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, Language::ALL.to_vec());
    }

    #[test]
    fn test_builtin_glyphs_never_empty() {
        for p in AlphabetTable::builtin().all() {
            assert!(!p.glyphs().is_empty(), "{} has no glyphs", p.display_name());
        }
    }

    #[rstest]
    #[case("greek", "Greek", 24)]
    #[case("russian", "Russian", 33)]
    #[case("romance", "Romance", 57)]
    #[case("GREEK", "Greek", 24)]
    #[case("Thai", "Thai", 42)]
    fn test_lookup_known(#[case] id: &str, #[case] name: &str, #[case] glyphs: usize) {
        let p = AlphabetTable::builtin().lookup(id).unwrap();
        assert_eq!(p.display_name(), name);
        assert_eq!(p.glyphs().len(), glyphs);
    }

    #[test]
    fn test_lookup_unknown_is_not_found() {
        let err = AlphabetTable::builtin().lookup("klingon").unwrap_err();
        assert!(matches!(err, ChatError::NotFound { ref id } if id == "klingon"));
    }

    #[rstest]
    #[case(" thai ")]
    #[case("thai\n")]
    #[case("gree")]
    #[case("")]
    fn test_lookup_requires_exact_id(#[case] id: &str) {
        assert!(matches!(
            AlphabetTable::builtin().lookup(id),
            Err(ChatError::NotFound { .. })
        ));
    }

    #[test]
    fn test_get_by_enum() {
        let p = AlphabetTable::builtin().get(Language::Hindi).unwrap();
        assert_eq!(p.flag(), "🇮🇳");
    }

    #[test]
    fn test_flags_banner() {
        let flags = AlphabetTable::builtin().flags();
        assert!(flags.starts_with("🇨🇳🇯🇵"));
        assert!(flags.ends_with("🇫🇷"));
    }

    // -- Construction --------------------------------------------------------

    #[test]
    fn test_empty_glyphs_rejected() {
        let err = LanguageProfile::new(Language::Greek, "Greek", "", "").unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            AlphabetTable::from_profiles(Vec::new()),
            Err(ChatError::Config(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let a = LanguageProfile::new(Language::Greek, "Greek", "", "αβ").unwrap();
        let b = LanguageProfile::new(Language::Greek, "Greek again", "", "γδ").unwrap();
        let err = AlphabetTable::from_profiles(vec![a, b]).unwrap_err();
        assert!(err.to_string().contains("greek"));
    }

    #[test]
    fn test_duplicate_glyphs_allowed() {
        let p = LanguageProfile::new(Language::Thai, "Thai", "", "กกก").unwrap();
        assert_eq!(p.glyphs(), &['ก', 'ก', 'ก']);
    }

    // -- Random selection ----------------------------------------------------

    #[test]
    fn test_choose_first_and_last() {
        let table = AlphabetTable::builtin();
        assert_eq!(table.choose(&mut FixedSource(0.0)).id(), Language::Chinese);
        assert_eq!(table.choose(&mut FixedSource(0.999)).id(), Language::Romance);
    }

    #[test]
    fn test_random_glyph_from_set() {
        let p = AlphabetTable::builtin().get(Language::Greek).unwrap();
        let mut rng = ScriptedSource::new(vec![0.0, 0.5, 0.99]);
        assert_eq!(p.random_glyph(&mut rng), 'α');
        assert_eq!(p.random_glyph(&mut rng), 'ν');
        assert_eq!(p.random_glyph(&mut rng), 'ω');
    }

    // -- Language parsing ----------------------------------------------------

    #[test]
    fn test_language_from_str_loose() {
        assert_eq!(Language::from_str_loose("Farsi").unwrap(), Language::Farsi);
        assert_eq!(Language::from_str_loose("KOREAN").unwrap(), Language::Korean);
        assert!(Language::from_str_loose("elvish").is_err());
        assert!(Language::from_str_loose(" farsi").is_err());
    }

    #[test]
    fn test_language_display_is_id() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string(), lang.id());
        }
    }

    #[test]
    fn test_language_serde_lowercase() {
        let json = serde_json::to_string(&Language::Georgian).unwrap();
        assert_eq!(json, "\"georgian\"");
        let back: Language = serde_json::from_str("\"arabic\"").unwrap();
        assert_eq!(back, Language::Arabic);
    }
}
