use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::alphabet::Language;
use crate::config::ChatConfig;
use crate::turn::Mode;

#[derive(Parser, Debug)]
#[command(name = "babel-chat")]
#[command(version)]
#[command(about = "A chat assistant that answers in scripts nobody asked for")]
pub struct Args {
    /// Assistant mode (transliterate, jester, gamble)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Probability of transliterating in gamble mode
    #[arg(long, short)]
    pub probability: Option<f64>,

    /// Always transliterate into this language
    #[arg(long, short, value_enum)]
    pub language: Option<Language>,

    /// Seed the random source for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Send a single message, print the result and exit
    #[arg(long)]
    pub once: Option<String>,

    /// Print the conversation log as JSON instead of styled rows
    #[arg(long)]
    pub json: bool,

    /// List supported languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Overlay explicit flags onto `config`.
    pub fn apply_to(&self, mut config: ChatConfig) -> ChatConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(p) = self.probability {
            config.probability = p;
        }
        if let Some(lang) = self.language {
            config.language = Some(lang);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
    }
}
