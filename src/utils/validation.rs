// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{RecommendationError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !Self::is_http_url(url) {
            return Err(RecommendationError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn is_http_url(value: &str) -> bool {
        value.starts_with("http://") || value.starts_with("https://")
    }

    pub fn validate_not_blank(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(RecommendationError::Validation(format!(
                "{} must not be blank",
                field
            )));
        }
        Ok(())
    }

    /// Cuts `text` to at most `max_chars` characters, appending "..." when shortened.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://example.com").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(Validator::validate_not_blank("name", "Sydney").is_ok());
        assert!(Validator::validate_not_blank("name", "").is_err());
        assert!(Validator::validate_not_blank("name", "   ").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
    }

    #[test]
    fn test_truncate_text_respects_char_boundaries() {
        assert_eq!(Validator::truncate_text("città è bella", 5), "città...");
    }
}
