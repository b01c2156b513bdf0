//! Error type shared by every pattern module.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown {kind}: '{name}'")]
    UnknownVariant { kind: &'static str, name: String },

    #[error("Invalid length {0}: must be a finite, non-negative number")]
    InvalidLength(f32),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatternError {
    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            name: name.into(),
        }
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::Config(err.to_string())
    }
}
