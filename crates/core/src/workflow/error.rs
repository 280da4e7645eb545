//! Workflow error types for expense approval.

use samiti_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::ledger::LedgerError;
use crate::workflow::types::TransactionStatus;

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: TransactionStatus,
        /// The attempted target status.
        to: TransactionStatus,
    },

    /// Income bypasses the approval workflow entirely.
    #[error("Income transactions are approved on creation and cannot be decided")]
    IncomeNotDecidable,

    /// Transaction not found.
    #[error("Transaction {0} not found")]
    TransactionNotFound(Uuid),

    /// Another caller decided the transaction first.
    #[error("Transaction {0} was decided concurrently, please re-fetch")]
    ConcurrentDecision(Uuid),

    /// Error raised by the underlying ledger store.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::IncomeNotDecidable | Self::ConcurrentDecision(_) => {
                409
            }
            Self::TransactionNotFound(_) => 404,
            Self::Ledger(e) => e.status_code(),
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::IncomeNotDecidable => "INCOME_NOT_DECIDABLE",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::ConcurrentDecision(_) => "CONCURRENT_DECISION",
            Self::Ledger(e) => e.error_code(),
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::Ledger(e) => e.into(),
            WorkflowError::InvalidTransition { .. } | WorkflowError::IncomeNotDecidable => {
                Self::InvalidState(err.to_string())
            }
            WorkflowError::TransactionNotFound(_) => Self::NotFound(err.to_string()),
            WorkflowError::ConcurrentDecision(_) => Self::Conflict(err.to_string()),
            WorkflowError::Database(msg) => Self::Database(msg),
        }
    }
}
