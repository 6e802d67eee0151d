use tracing::warn;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::alphabet::{AlphabetTable, LanguageProfile};
use crate::error::ChatError;
use crate::rng::RandomSource;

/// Letters (`L*`) and numbers (`N*`) in any script.
///
/// Combining vowel signs such as U+093E or U+0E31 are marks, not letters.
pub fn is_alphanumeric(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Unicode whitespace plus the information separators U+001C..=U+001F.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1C}'..='\u{1F}')
}

/// Substitute one character.
///
/// Whitespace of any kind collapses to a single space, letters and digits in
/// any script become a random glyph, everything else passes through.
pub fn substitute_char(ch: char, profile: &LanguageProfile, rng: &mut dyn RandomSource) -> char {
    if is_whitespace(ch) {
        ' '
    } else if is_alphanumeric(ch) {
        profile.random_glyph(rng)
    } else {
        ch
    }
}

/// Rewrite `text` in the script of `profile`, or of a random profile from
/// `table` when `profile` is `None`.
///
/// Returns `(output, profile_used)`. The output has exactly as many `char`s
/// as the input. Each alphanumeric character is sampled independently, so
/// repeated letters usually map to different glyphs. A profile is chosen even
/// for empty input.
pub fn transliterate<'t>(
    text: &str,
    profile: Option<&'t LanguageProfile>,
    table: &'t AlphabetTable,
    rng: &mut dyn RandomSource,
) -> (String, &'t LanguageProfile) {
    let profile = match profile {
        Some(p) => p,
        None => table.choose(rng),
    };
    let output = text
        .chars()
        .map(|ch| substitute_char(ch, profile, rng))
        .collect();
    (output, profile)
}

/// Like [`transliterate`] with a string language id.
///
/// An unknown id is not an error for the caller: it is logged and a random
/// profile is used instead.
pub fn transliterate_id<'t>(
    text: &str,
    id: &str,
    table: &'t AlphabetTable,
    rng: &mut dyn RandomSource,
) -> (String, &'t LanguageProfile) {
    let profile = match table.lookup(id) {
        Ok(p) => Some(p),
        Err(ChatError::NotFound { id }) => {
            warn!(language = %id, "unknown language, falling back to a random one");
            None
        }
        Err(e) => {
            warn!(error = %e, "language lookup failed, falling back to a random one");
            None
        }
    };
    transliterate(text, profile, table, rng)
}
