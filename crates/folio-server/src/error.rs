use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use folio_core::models::wire::ErrorBody;
use folio_gemini::error::GeminiError;

/// Used when the provider fails without saying why.
pub const GENERIC_UPSTREAM_ERROR: &str = "AI request failed";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// The request body could not be decoded.
    BadRequest(String),
    /// Server misconfiguration detected before any upstream call.
    Config(String),
    /// The model provider failed; the message is shown to the caller.
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Config(msg) => {
                tracing::error!("configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Upstream(msg) => {
                tracing::error!("upstream error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<GeminiError> for ApiError {
    fn from(e: GeminiError) -> Self {
        let message = e.to_string();
        if message.trim().is_empty() {
            ApiError::Upstream(GENERIC_UPSTREAM_ERROR.to_string())
        } else {
            ApiError::Upstream(message)
        }
    }
}
