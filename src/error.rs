// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DetectorError>;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DetectorError {
    /// Upstream failures are surfaced to the user as "search failed",
    /// never as "nothing found".
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, DetectorError::Search(_) | DetectorError::Http(_))
    }
}

impl From<serde_json::Error> for DetectorError {
    fn from(err: serde_json::Error) -> Self {
        DetectorError::Serialization(err.to_string())
    }
}
