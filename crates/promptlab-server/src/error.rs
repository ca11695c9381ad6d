//! HTTP error mapping
//!
//! [`ApiError`] wraps [`DomainError`] and adds HTTP-specific variants. Every
//! error renders as `{"error": <message>, "code": <CODE>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use promptlab::DomainError;

/// Application-level error type for HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Primary entity of the request does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(domain) => match domain {
                DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                DomainError::Validation(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
                }
                DomainError::InvalidReference { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_REFERENCE")
                }
                DomainError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            },
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        if status.is_client_error() {
            tracing::debug!(%status, error = %self, "Request rejected");
        }

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
