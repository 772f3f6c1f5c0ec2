// src/error.rs
//! Library error type. The CLI wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OquareError {
    #[error("cannot read {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Root-to-leaf path enumeration exceeded the limit of {limit} paths")]
    PathLimitExceeded { limit: usize },

    #[error("Invalid indicator file: {0}")]
    Indicators(String),
}

pub type Result<T> = std::result::Result<T, OquareError>;

impl OquareError {
    /// Attaches the offending path to an I/O failure.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
