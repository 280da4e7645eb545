//! Drive error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use samiti_shared::AppError;
use thiserror::Error;

/// Errors that can occur during drive operations.
#[derive(Debug, Error)]
pub enum DriveError {
    /// Per-member amount is not positive, has more than two decimal places
    /// or is 10^14 or more.
    #[error("Amount per member must be positive, below 10^14 and have at most 2 decimal places, got {0}")]
    InvalidAmountPerMember(Decimal),

    /// A required field is missing or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// End date precedes start date.
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Member count is negative.
    #[error("Total members cannot be negative, got {0}")]
    NegativeMemberCount(i64),

    /// Drive not found.
    #[error("Drive {0} not found")]
    DriveNotFound(i64),

    /// The member registry failed to answer.
    #[error("Member registry error: {0}")]
    Registry(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl DriveError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmountPerMember(_)
            | Self::MissingField(_)
            | Self::InvalidDateRange { .. }
            | Self::NegativeMemberCount(_) => 400,
            Self::DriveNotFound(_) => 404,
            Self::Registry(_) => 502,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmountPerMember(_) => "INVALID_AMOUNT_PER_MEMBER",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::NegativeMemberCount(_) => "NEGATIVE_MEMBER_COUNT",
            Self::DriveNotFound(_) => "DRIVE_NOT_FOUND",
            Self::Registry(_) => "MEMBER_REGISTRY_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<DriveError> for AppError {
    fn from(err: DriveError) -> Self {
        match err {
            DriveError::InvalidAmountPerMember(_)
            | DriveError::MissingField(_)
            | DriveError::InvalidDateRange { .. }
            | DriveError::NegativeMemberCount(_) => Self::Validation(err.to_string()),
            DriveError::DriveNotFound(_) => Self::NotFound(err.to_string()),
            DriveError::Registry(msg) => Self::ExternalService(msg),
            DriveError::Database(msg) => Self::Database(msg),
        }
    }
}
