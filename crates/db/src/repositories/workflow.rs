//! Approval workflow repository.
//!
//! Validates transitions with [`WorkflowService`] and applies them through
//! the ledger store's compare-and-set update.

use samiti_core::actor::Actor;
use samiti_core::ledger::{
    InsertionOrder, LedgerError, LedgerService, PaymentMethodSet, Transaction, TransactionDraft,
    TransactionFilter, TransactionKind,
};
use samiti_core::workflow::{Decision, TransactionStatus, WorkflowError, WorkflowService};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::ledger::TransactionRepository;

/// Workflow repository for expense approval.
#[derive(Debug, Clone)]
pub struct WorkflowRepository {
    ledger: TransactionRepository,
    methods: PaymentMethodSet,
}

impl WorkflowRepository {
    /// Creates a new workflow repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, methods: PaymentMethodSet) -> Self {
        Self {
            ledger: TransactionRepository::new(db),
            methods,
        }
    }

    /// Submits an expense; it enters the workflow as pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft fails validation, references an
    /// unknown drive, or the database operation fails.
    #[instrument(skip(self, draft, actor), fields(actor = actor.member_id))]
    pub async fn submit_expense(
        &self,
        draft: TransactionDraft,
        actor: Actor,
    ) -> Result<Transaction, WorkflowError> {
        let new = LedgerService::prepare(TransactionKind::Expense, draft, &actor, &self.methods)?;
        let tx = self.ledger.append(new).await?;
        info!(id = %tx.id, amount = %tx.amount, "Expense submitted for approval");
        Ok(tx)
    }

    /// Approves or rejects a pending expense.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Transaction is not found
    /// - Transaction is income, or not pending (`InvalidTransition`)
    /// - Another caller decided it first (`ConcurrentDecision`)
    /// - Database operation fails
    #[instrument(skip(self, actor), fields(actor = actor.member_id, role = %actor.role))]
    pub async fn decide(
        &self,
        id: Uuid,
        decision: Decision,
        actor: Actor,
    ) -> Result<Transaction, WorkflowError> {
        let current = self.ledger.get(id).await.map_err(|e| match e {
            LedgerError::TransactionNotFound(id) => WorkflowError::TransactionNotFound(id),
            other => WorkflowError::Ledger(other),
        })?;

        let action = WorkflowService::decide(current.kind, current.status, decision, actor)?;

        match self.ledger.update_status(id, &action).await {
            Ok(tx) => {
                info!(%id, status = %tx.status, "Expense decided");
                Ok(tx)
            }
            Err(LedgerError::ConcurrentModification(id)) => {
                warn!(%id, "Decision lost to a concurrent decision");
                Err(WorkflowError::ConcurrentDecision(id))
            }
            Err(LedgerError::NotPending { status, .. }) => Err(WorkflowError::InvalidTransition {
                from: status,
                to: decision.target_status(),
            }),
            Err(LedgerError::TransactionNotFound(id)) => Err(WorkflowError::TransactionNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists pending expenses matching `filter` in the requested order.
    ///
    /// Kind and status in `filter` are overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_pending(
        &self,
        filter: TransactionFilter,
        order: InsertionOrder,
    ) -> Result<Vec<Transaction>, WorkflowError> {
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            status: Some(TransactionStatus::Pending),
            ..filter
        };
        Ok(self.ledger.query_in_order(&filter, order).await?)
    }
}
