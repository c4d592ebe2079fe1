//! Error types for the analysis service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Analysis Error Enum ==
/// Unified error type for the analysis service.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Request data is malformed (e.g. `text` is not a string)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown operation tag
    #[error("unknown op: {0}")]
    UnsupportedOperation(String),

    /// A chunk computation failed; the whole request is aborted
    #[error("worker failure: {0}")]
    WorkerFailure(String),

    /// Text exceeds the maximum accepted size
    #[error("text too large")]
    TextTooLarge,

    /// The result cache could not be reached. Non-fatal: the orchestrator
    /// swallows this and proceeds as a cache bypass.
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            AnalysisError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AnalysisError::UnsupportedOperation(_) => StatusCode::BAD_REQUEST,
            AnalysisError::TextTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AnalysisError::WorkerFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnalysisError::CacheUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the analysis service.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::InvalidInput("text must be a string".to_string());
        assert_eq!(err.to_string(), "invalid input: text must be a string");

        let err = AnalysisError::UnsupportedOperation("nope".to_string());
        assert_eq!(err.to_string(), "unknown op: nope");

        let err = AnalysisError::TextTooLarge;
        assert_eq!(err.to_string(), "text too large");
    }

    #[test]
    fn test_status_mapping() {
        let resp = AnalysisError::TextTooLarge.into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let resp = AnalysisError::InvalidInput("bad".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AnalysisError::WorkerFailure("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
