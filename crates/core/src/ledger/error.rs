//! Ledger error types for validation and state errors.
//!
//! This module defines all errors that can occur during ledger store
//! operations: input validation, unknown identifiers, illegal state and
//! lost write races.

use rust_decimal::Decimal;
use samiti_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::ledger::types::TransactionKind;
use crate::workflow::types::TransactionStatus;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Amount is not positive, has more than two decimal places or is 10^14
    /// or more.
    #[error("Amount must be positive, below 10^14 and have at most 2 decimal places, got {0}")]
    InvalidAmount(Decimal),

    /// A required field is missing or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Payment method is not part of the configured set.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Status does not fit the transaction kind (e.g. pending income).
    #[error("Cannot create {kind} transaction with status {status}")]
    InconsistentStatus {
        /// Transaction kind.
        kind: TransactionKind,
        /// Requested status.
        status: TransactionStatus,
    },

    /// Opening balances must be member-less income.
    #[error("Opening balance must be an income without a member")]
    InvalidOpeningBalance,

    // ========== Lookup Errors ==========
    /// Transaction not found.
    #[error("Transaction {0} not found")]
    TransactionNotFound(Uuid),

    /// Referenced drive does not exist.
    #[error("Drive {0} not found")]
    DriveNotFound(i64),

    // ========== State Errors ==========
    /// Status updates require a pending transaction.
    #[error("Transaction {id} is {status}, not pending")]
    NotPending {
        /// Transaction ID.
        id: Uuid,
        /// Status found in the store.
        status: TransactionStatus,
    },

    /// Field replacement is reserved for opening-balance entries.
    #[error("Transaction {0} is not an opening balance")]
    NotOpeningBalance(Uuid),

    // ========== Concurrency Errors ==========
    /// Another writer changed the record first.
    #[error("Transaction {0} was modified concurrently, please re-fetch")]
    ConcurrentModification(Uuid),

    /// An opening balance already exists for the method.
    #[error("An opening balance for {0} already exists, please re-fetch")]
    DuplicateOpeningBalance(String),

    // ========== Infrastructure Errors ==========
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::UnknownPaymentMethod(_) => "UNKNOWN_PAYMENT_METHOD",
            Self::InconsistentStatus { .. } => "INCONSISTENT_STATUS",
            Self::InvalidOpeningBalance => "INVALID_OPENING_BALANCE",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::DriveNotFound(_) => "DRIVE_NOT_FOUND",
            Self::NotPending { .. } => "NOT_PENDING",
            Self::NotOpeningBalance(_) => "NOT_OPENING_BALANCE",
            Self::ConcurrentModification(_) => "CONCURRENT_MODIFICATION",
            Self::DuplicateOpeningBalance(_) => "DUPLICATE_OPENING_BALANCE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::InvalidAmount(_)
            | Self::MissingField(_)
            | Self::UnknownPaymentMethod(_)
            | Self::InconsistentStatus { .. }
            | Self::InvalidOpeningBalance => 400,

            // 404 Not Found
            Self::TransactionNotFound(_) | Self::DriveNotFound(_) => 404,

            // 409 Conflict - state and concurrency errors
            Self::NotPending { .. }
            | Self::NotOpeningBalance(_)
            | Self::ConcurrentModification(_)
            | Self::DuplicateOpeningBalance(_) => 409,

            // 500 Internal Server Error
            Self::Database(_) => 500,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount(_)
            | LedgerError::MissingField(_)
            | LedgerError::UnknownPaymentMethod(_)
            | LedgerError::InconsistentStatus { .. }
            | LedgerError::InvalidOpeningBalance => Self::Validation(err.to_string()),
            LedgerError::TransactionNotFound(_) | LedgerError::DriveNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            LedgerError::NotPending { .. } | LedgerError::NotOpeningBalance(_) => {
                Self::InvalidState(err.to_string())
            }
            LedgerError::ConcurrentModification(_) | LedgerError::DuplicateOpeningBalance(_) => {
                Self::Conflict(err.to_string())
            }
            LedgerError::Database(msg) => Self::Database(msg),
        }
    }
}
