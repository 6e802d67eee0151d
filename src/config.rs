//! TOML configuration for the chat shell.
//!
//! Priority (highest first): CLI flags, the file passed with `--config`,
//! built-in defaults.
//!
//! ```toml
//! mode = "gamble"
//! probability = 0.5
//! language = "greek"
//! seed = 42
//!
//! [phrases]
//! exclamations = ["Good grief!"]
//! rebukes = ["You walnut."]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::{AlphabetTable, Language};
use crate::error::{ChatError, Result};
use crate::responder::PhrasePools;
use crate::turn::{Mode, TurnController, DEFAULT_PROBABILITY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatConfig {
    pub mode: Mode,
    /// Transliteration probability for `gamble` mode.
    pub probability: f64,
    /// Pin every transliteration to one language.
    pub language: Option<Language>,
    /// Seed for a reproducible session.
    pub seed: Option<u64>,
    pub phrases: PhrasePools,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            probability: DEFAULT_PROBABILITY,
            language: None,
            seed: None,
            phrases: PhrasePools::default(),
        }
    }
}

impl ChatConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ChatError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), mode = %config.mode, "loaded config");
        Ok(config)
    }

    /// Validate and build a controller over `table`.
    pub fn build_controller<'t>(&self, table: &'t AlphabetTable) -> Result<TurnController<'t>> {
        let mut ctl = TurnController::new(table, self.phrases.clone(), self.mode)
            .with_probability(self.probability)?;
        if let Some(lang) = self.language {
            ctl = ctl.with_language(lang)?;
        }
        Ok(ctl)
    }
}
