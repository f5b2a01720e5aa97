//! API failure type and its JSON translation.
//!
//! Handlers convert every failure into an [`ApiError`] before returning;
//! the `IntoResponse` impl is the terminal stage that logs the failure
//! and shapes the client-facing body. Clients only ever see a status
//! code and a `{ "message": ... }` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Typed failure carried from handlers to the response translation stage.
///
/// The variant is the discriminant; the payload is the client-facing
/// message. Internal detail (driver errors, malformed ids) is logged at
/// the point where the failure is wrapped and never carried here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed validation (400).
    #[error("{0}")]
    Validation(String),

    /// Requested or referenced entity does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Persistence operation failed (500).
    #[error("{0}")]
    Persistence(String),

    /// Unexpected failure caught at the outermost stage (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get the discriminant name used in server-side logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Persistence(_) => "persistence",
            Self::Internal(_) => "internal",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(
            kind = self.kind(),
            status = %status,
            message = %self,
            "Request failed"
        );

        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
