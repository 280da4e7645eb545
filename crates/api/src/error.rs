//! JSON error responses.
//!
//! Every failure leaves the API as `{ "error", "code", "message" }`, where
//! `error` is the category (`VALIDATION_ERROR`, `NOT_FOUND`,
//! `INVALID_STATE`, `CONFLICT`, ...) and `code` the domain-specific reason.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use samiti_core::drive::DriveError;
use samiti_core::ledger::LedgerError;
use samiti_core::workflow::WorkflowError;
use samiti_shared::AppError;
use serde_json::json;
use tracing::error;

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    code: &'static str,
}

impl ApiError {
    /// The caller could not be identified.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into()).into()
    }

    /// The caller is identified but not allowed.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::Forbidden(message.into()).into()
    }

    /// Malformed request input outside the engine's own validation.
    #[must_use]
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            error: AppError::Validation(message.into()),
            code,
        }
    }

    /// HTTP status of this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Domain-specific error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let code = error.error_code();
        Self { error, code }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let code = err.error_code();
        Self {
            error: err.into(),
            code,
        }
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        let code = err.error_code();
        Self {
            error: err.into(),
            code,
        }
    }
}

impl From<DriveError> for ApiError {
    fn from(err: DriveError) -> Self {
        let code = err.error_code();
        Self {
            error: err.into(),
            code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self.error, code = self.code, "Request failed");
            "An error occurred".to_string()
        } else {
            self.error.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.error.error_code(),
                "code": self.code,
                "message": message,
            })),
        )
            .into_response()
    }
}
