//! Request DTOs for the analysis API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::config::MAX_TEXT_CHARS;
use crate::error::{AnalysisError, Result};

/// Request body for the analysis endpoints (POST /length, POST /num_vowels).
///
/// The `text` field is accepted as a raw JSON value so that a missing or
/// null text can default to the empty string while a non-string value is
/// rejected explicitly, matching the original wire behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to analyze
    #[serde(default)]
    pub text: Value,
}

impl AnalyzeRequest {
    /// Validates the request and extracts the text.
    ///
    /// - Missing or null `text` reads as `""`.
    /// - Non-string `text` is an `InvalidInput` error (400).
    /// - Texts over [`MAX_TEXT_CHARS`] characters are rejected (413).
    pub fn text(&self) -> Result<&str> {
        let text = match &self.text {
            Value::Null => "",
            Value::String(s) => s.as_str(),
            _ => {
                return Err(AnalysisError::InvalidInput(
                    "text must be a string".to_string(),
                ))
            }
        };

        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(AnalysisError::TextTooLarge);
        }

        Ok(text)
    }
}
