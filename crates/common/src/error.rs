//! Common error types and handling for Talentboard
//!
//! All handlers return [`Result`]; the [`IntoResponse`] impl is the single
//! boundary adapter that maps error kinds to HTTP status codes and a JSON
//! body. The status mapping preserves the legacy API contract: validation
//! and duplicate-email failures are 401, password mismatch is 402 and
//! persistence failures are 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Talentboard application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Senhas não coincidem")]
    PasswordMismatch,

    #[error("Email já cadastrado")]
    DuplicateEmail,
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::DuplicateEmail => StatusCode::UNAUTHORIZED,
            Error::PasswordMismatch => StatusCode::PAYMENT_REQUIRED,
            Error::Database(_) => StatusCode::BAD_REQUEST,
            Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::PasswordMismatch => "PASSWORD_MISMATCH",
            Error::DuplicateEmail => "DUPLICATE_EMAIL",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Persistence and unexpected failures carry internal detail; log it
        // here and send clients a generic message.
        let message = match &self {
            Error::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Database operation failed".to_string()
            }
            Error::Unexpected(e) => {
                tracing::error!(error = %e, "Internal server error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
