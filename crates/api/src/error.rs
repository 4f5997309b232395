use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bizdir_core::error::DomainError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DomainError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bizdir-core`.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The URL named a resource type that does not exist.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Domain(domain) => classify_domain_error(domain),
            AppError::UnknownResource(slug) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No resource named '{slug}'"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a domain error into an HTTP status, error code, and message.
///
/// Client-fault kinds keep their message; unexpected errors map to 500
/// with a sanitized message (the cause was already logged at the source).
fn classify_domain_error(err: &DomainError) -> (StatusCode, &'static str, String) {
    match err {
        DomainError::MissingField { .. } => {
            (StatusCode::BAD_REQUEST, "MISSING_FIELD", err.to_string())
        }
        DomainError::InvalidType { .. } => {
            (StatusCode::BAD_REQUEST, "INVALID_TYPE", err.to_string())
        }
        DomainError::InvalidFormat(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_FORMAT", err.to_string())
        }
        DomainError::Duplicate { .. } => (StatusCode::CONFLICT, "DUPLICATE", err.to_string()),
        DomainError::DuplicateTranslation { .. } => (
            StatusCode::CONFLICT,
            "DUPLICATE_TRANSLATION",
            err.to_string(),
        ),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        DomainError::UnknownLanguage(_) => {
            (StatusCode::BAD_REQUEST, "UNKNOWN_LANGUAGE", err.to_string())
        }
        DomainError::ImmutableField { .. } => {
            (StatusCode::BAD_REQUEST, "IMMUTABLE_FIELD", err.to_string())
        }
        DomainError::InvalidField { .. } => {
            (StatusCode::BAD_REQUEST, "INVALID_FIELD", err.to_string())
        }
        DomainError::Validation(_) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
        }
        DomainError::Unexpected(msg) => {
            tracing::error!(error = %msg, "Internal domain error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
