use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quillquest_venice::VeniceError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses. Provider failures surface to the client as a generic
/// per-route message; the underlying detail is logged server-side only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A bad request with a human-readable, field-specific message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A provider failure during "`what`" (e.g. "generate character").
    #[error("Failed to {what}: {source}")]
    Generation {
        what: &'static str,
        source: VeniceError,
    },
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Wrap a provider error with the operation it interrupted.
    pub fn generation(what: &'static str, source: VeniceError) -> Self {
        ApiError::Generation { what, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Generation { what, source } => {
                tracing::error!(error = %source, operation = what, "provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    format!("Failed to {what}"),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
