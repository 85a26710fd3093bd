//! Error types for the fallible edges of the engine.
//!
//! Question generation, session assembly and answer checking are total; only
//! configuration loading, profile persistence and mode parsing can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrillError {
    /// A practice mode name that is not on the menu.
    #[error("unknown practice mode: {0}")]
    UnknownMode(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DrillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DrillError::Io { path: path.into(), source }
    }
}
