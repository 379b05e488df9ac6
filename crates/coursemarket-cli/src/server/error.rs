//! API error types for HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coursemarket_core::Error as CoreError;
use serde::Serialize;

/// Structured API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    fn status(&self) -> StatusCode {
        match self.code {
            "ARTIFACT_NOT_FOUND" | "NOT_FOUND" => StatusCode::NOT_FOUND,
            "MALFORMED_ARTIFACT" | "INVALID_CONFIG" | "BAD_REQUEST" => StatusCode::BAD_REQUEST,
            "TRANSPORT_ERROR" | "ARTIFACT_STATUS" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = err.code();

        // Don't leak filesystem details
        let message = if matches!(err, CoreError::Io(_)) {
            "An internal error occurred reading artifacts".to_string()
        } else {
            err.to_string()
        };

        Self { code, message }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
