//! Error types for the Lexsum summarization engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Lexsum operations.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Invalid or unsupported configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document produced a structure the scoring models cannot work with.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Language could not be resolved.
    #[error("Language error: {0}")]
    Language(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Result type alias for Lexsum operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        SummaryError::Serialization(err.to_string())
    }
}

impl SummaryError {
    /// Returns `true` for errors caused by the configuration rather than the document.
    pub fn is_config(&self) -> bool {
        matches!(self, SummaryError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SummaryError::Config("bad strategy".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad strategy");
        assert!(err.is_config());
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: SummaryError = io.into();
        assert!(matches!(err, SummaryError::Io(_)));
        assert!(!err.is_config());
    }
}
