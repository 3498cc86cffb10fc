//! Error taxonomy for the prediction endpoint.
//!
//! Every per-request failure is converted to a structured JSON body with an
//! `error` string at this boundary; nothing escapes as an unstructured fault.

use crate::feature_extractor::FEATURE_ORDER;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Request-level errors surfaced by the prediction handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON at all
    #[error("Invalid JSON in request body: {0}")]
    MalformedBody(String),

    /// Body parses but `inputs` is absent, not an array, or empty
    #[error("Missing \"inputs\" field in request body")]
    MissingInputs,

    /// Method outside GET/POST/OPTIONS
    #[error("Method not allowed. Allowed methods: GET, POST, OPTIONS")]
    MethodNotAllowed,

    /// Model invocation failed during the liveness probe
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Any failure during record parsing, vectorization, or batch inference.
    /// Fails the whole batch; no partial-success response exists.
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

/// Worked example of a valid request body, keyed by every schema field.
/// Doubles as inline documentation for API consumers.
pub fn expected_format() -> Value {
    let example: Map<String, Value> = FEATURE_ORDER
        .iter()
        .map(|&field| (field.to_string(), json!(0.0)))
        .collect();

    json!({ "inputs": [example] })
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::MissingInputs => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::HealthCheckFailed(_) | ApiError::PredictionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::MissingInputs => json!({
                "error": self.to_string(),
                "expected_format": expected_format(),
            }),
            _ => json!({ "error": self.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MalformedBody("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingInputs.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::HealthCheckFailed("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::PredictionFailed("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_expected_format_lists_all_fields() {
        let format = expected_format();
        let example = &format["inputs"][0];

        for field in FEATURE_ORDER {
            assert_eq!(example[field], 0.0, "missing field {}", field);
        }
        assert_eq!(example.as_object().unwrap().len(), FEATURE_ORDER.len());
    }

    #[test]
    fn test_error_messages_are_distinct() {
        // Callers must be able to tell broken syntax apart from a missing field
        let malformed = ApiError::MalformedBody("expected value at line 1".into()).to_string();
        let missing = ApiError::MissingInputs.to_string();

        assert!(malformed.contains("Invalid JSON"));
        assert!(missing.contains("inputs"));
        assert_ne!(malformed, missing);
    }
}
