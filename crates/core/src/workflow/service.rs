//! Workflow service for expense approval.
//!
//! This module implements the state machine that moves expenses from
//! `pending` to `approved` or `rejected`. Income never enters it.

use chrono::Utc;

use crate::actor::Actor;
use crate::ledger::types::TransactionKind;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{Decision, TransactionStatus, WorkflowAction};

/// Stateless service for managing expense approval transitions.
///
/// All methods are associated functions that validate a transition and
/// return the resulting `WorkflowAction` with audit information. Applying
/// the action atomically is the store's job.
pub struct WorkflowService;

impl WorkflowService {
    /// Status a new transaction of `kind` is created in.
    #[must_use]
    pub fn initial_status(kind: TransactionKind) -> TransactionStatus {
        match kind {
            TransactionKind::Income => TransactionStatus::Approved,
            TransactionKind::Expense => TransactionStatus::Pending,
        }
    }

    /// Decide a pending expense.
    ///
    /// # Arguments
    /// * `kind` - The kind of the transaction being decided
    /// * `current_status` - The current status of the transaction
    /// * `decision` - Approve or reject
    /// * `actor` - Who decides (recorded for audit)
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Decide)` if the transition is valid
    /// * `Err(WorkflowError::IncomeNotDecidable)` for income
    /// * `Err(WorkflowError::InvalidTransition)` if not in Pending status
    pub fn decide(
        kind: TransactionKind,
        current_status: TransactionStatus,
        decision: Decision,
        actor: Actor,
    ) -> Result<WorkflowAction, WorkflowError> {
        if kind == TransactionKind::Income {
            return Err(WorkflowError::IncomeNotDecidable);
        }

        let target = decision.target_status();
        if !Self::is_valid_transition(current_status, target) {
            return Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: target,
            });
        }

        Ok(WorkflowAction::Decide {
            new_status: target,
            decided_by: actor,
            decided_at: Utc::now(),
        })
    }

    /// Returns true if `from → to` is a legal transition: only a pending
    /// transaction moves, and only into a terminal status.
    #[must_use]
    pub fn is_valid_transition(from: TransactionStatus, to: TransactionStatus) -> bool {
        !from.is_terminal() && to.is_terminal()
    }
}
