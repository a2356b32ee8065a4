// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SenseError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed sense key: {0}")]
    MalformedSenseKey(String),

    #[error("Unknown similarity metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Tree syntax error at byte {offset}: {message}")]
    Tree { offset: usize, message: String },
}

pub type Result<T> = std::result::Result<T, SenseError>;

// Allow `?` on std::io::Error by converting to SenseError::Io with unknown path.
impl From<std::io::Error> for SenseError {
    fn from(source: std::io::Error) -> Self {
        SenseError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<serde_json::Error> for SenseError {
    fn from(e: serde_json::Error) -> Self {
        SenseError::Lexicon(e.to_string())
    }
}

impl From<toml::de::Error> for SenseError {
    fn from(e: toml::de::Error) -> Self {
        SenseError::InvalidConfig(e.to_string())
    }
}

impl SenseError {
    /// Attaches a path to an I/O failure.
    #[must_use]
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SenseError::Io {
            source,
            path: path.into(),
        }
    }
}
