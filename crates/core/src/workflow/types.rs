//! Workflow domain types for expense approval.
//!
//! This module defines the core types used for managing transaction
//! status transitions and the decisions that drive them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actor::Actor;

/// Transaction status in the approval workflow.
///
/// Expenses enter as `Pending`; income enters directly as `Approved`.
/// The valid transitions are:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
///
/// `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting a decision.
    Pending,
    /// Counts toward balances and drive aggregates.
    Approved,
    /// Has no ledger effect, permanently.
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Returns true if a transaction in this status affects balances and aggregates.
    #[must_use]
    pub fn counts_toward_balances(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decision an approver takes on a pending expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Approve the expense.
    Approved,
    /// Reject the expense.
    Rejected,
}

impl Decision {
    /// Returns the status a pending transaction moves to.
    #[must_use]
    pub fn target_status(self) -> TransactionStatus {
        match self {
            Self::Approved => TransactionStatus::Approved,
            Self::Rejected => TransactionStatus::Rejected,
        }
    }

    /// Parses a decision from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "approved" | "approve" => Some(Self::Approved),
            "rejected" | "reject" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_status())
    }
}

/// Workflow action representing a validated state transition with audit data.
#[derive(Debug, Clone)]
pub enum WorkflowAction {
    /// A decision on a pending expense.
    Decide {
        /// The new status after the decision.
        new_status: TransactionStatus,
        /// Who decided.
        decided_by: Actor,
        /// When the decision was taken.
        decided_at: DateTime<Utc>,
    },
}

impl WorkflowAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> TransactionStatus {
        match self {
            Self::Decide { new_status, .. } => *new_status,
        }
    }
}
