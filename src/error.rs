//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the chat core.
///
/// Configuration problems are reported when a table, pool, or controller is
/// built; a constructed controller never fails mid-turn.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A language id that is not in the alphabet table.
    #[error("unknown language: {id}")]
    NotFound { id: String },

    /// Invalid static configuration (empty alphabet, empty phrase pool, ...).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::config::ChatConfig`].
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ChatError {
    pub fn config(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
