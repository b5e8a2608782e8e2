// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendationError>;

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Failure modes of a single dataset fetch.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::from(json_err);
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
