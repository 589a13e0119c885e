//! Error handling and HTTP error conversion
//!
//! Validation failures from `sail_build_core` carry their exact user-facing
//! message and map to plain-text 400 responses. Rendering faults are server
//! errors: the client gets a generic body and the details go to the log,
//! never over the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use sail_build_core::ValidationFailure;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A request parameter failed validation; the display string is the
    /// exact message for the first failing field.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The script template references a placeholder with no value.
    #[error(transparent)]
    Render(#[from] template_engine::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log error server-side
        log_error(&self, status);

        let body = match &self {
            ApiError::Validation(failure) => failure.to_string(),
            ApiError::Render(_) => "An internal error occurred.".to_string(),
        };

        (status, body).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("API error: {} - {}", status, error);
    } else {
        tracing::warn!("API error: {} - {}", status, error);
    }
}
