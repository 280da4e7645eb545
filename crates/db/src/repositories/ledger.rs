//! Ledger store: durable, queryable collection of transactions.
//!
//! Status transitions and opening-balance edits are compare-and-set
//! updates, so concurrent writers to one row serialize in the database
//! and exactly one wins.

use chrono::{SubsecRound, Utc};
use samiti_core::ledger::{
    InsertionOrder, LedgerError, NewTransaction, PaymentMethodBalance, PaymentMethodSet,
    Transaction, TransactionFilter, TransactionPatch, summarize_balances,
    validation::{validate_new_transaction, validate_patch},
};
use samiti_core::workflow::{TransactionStatus, WorkflowAction};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, Set, SqlErr, TransactionTrait,
    prelude::DateTimeWithTimeZone,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::entities::{
    contribution_drives,
    sea_orm_active_enums::{
        TransactionKind as DbTransactionKind, TransactionStatus as DbTransactionStatus,
    },
    transactions,
};

/// Ledger store repository.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a transaction, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction breaks a validation rule
    /// - The referenced drive does not exist
    /// - An opening balance already exists for the payment method
    /// - Database operation fails
    #[instrument(skip(self, new), fields(kind = %new.kind, payment_method = %new.payment_method))]
    pub async fn append(&self, new: NewTransaction) -> Result<Transaction, LedgerError> {
        validate_new_transaction(&new)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        if let Some(drive_id) = new.drive_id {
            let drive = contribution_drives::Entity::find_by_id(drive_id)
                .one(&txn)
                .await
                .map_err(|e| LedgerError::Database(e.to_string()))?;
            if drive.is_none() {
                return Err(LedgerError::DriveNotFound(drive_id));
            }
        }

        let model = insert_transaction(&txn, &new)
            .await
            .map_err(|e| insert_error(e, &new))?;

        txn.commit()
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        info!(id = %model.id, status = ?model.status, "Transaction appended");
        Ok(model.into())
    }

    /// Fetches a transaction by id.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` for an unknown id.
    pub async fn get(&self, id: Uuid) -> Result<Transaction, LedgerError> {
        find_transaction(&self.db, id)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?
            .map(Into::into)
            .ok_or(LedgerError::TransactionNotFound(id))
    }

    /// Lists transactions matching `filter`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, LedgerError> {
        self.query_in_order(filter, InsertionOrder::OldestFirst)
            .await
    }

    /// Lists transactions matching `filter` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_in_order(
        &self,
        filter: &TransactionFilter,
        order: InsertionOrder,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let select = filtered(filter);
        let select = match order {
            InsertionOrder::OldestFirst => select
                .order_by_asc(transactions::Column::CreatedAt)
                .order_by_asc(transactions::Column::Id),
            InsertionOrder::NewestFirst => select
                .order_by_desc(transactions::Column::CreatedAt)
                .order_by_desc(transactions::Column::Id),
        };

        let models = select
            .all(&self.db)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Applies a workflow decision to a pending transaction.
    ///
    /// The write only lands if the row is still pending when the update
    /// runs; a caller that loses that race gets `ConcurrentModification`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Transaction is not found
    /// - Transaction is not pending (`NotPending`)
    /// - Another caller changed the status first (`ConcurrentModification`)
    /// - Database operation fails
    #[instrument(skip(self, action), fields(new_status = %action.new_status()))]
    pub async fn update_status(
        &self,
        id: Uuid,
        action: &WorkflowAction,
    ) -> Result<Transaction, LedgerError> {
        let current = self.get(id).await?;
        if current.status != TransactionStatus::Pending {
            return Err(LedgerError::NotPending {
                id,
                status: current.status,
            });
        }

        let WorkflowAction::Decide {
            new_status,
            decided_by,
            decided_at,
        } = action;

        let changes = transactions::ActiveModel {
            status: Set((*new_status).into()),
            decided_by: Set(Some(decided_by.member_id)),
            decided_role: Set(Some(decided_by.role.as_str().to_string())),
            decided_at: Set(Some(decided_at.trunc_subsecs(6).into())),
            updated_at: Set(timestamp()),
            ..Default::default()
        };

        let result = transactions::Entity::update_many()
            .set(changes)
            .filter(transactions::Column::Id.eq(id))
            .filter(transactions::Column::Status.eq(DbTransactionStatus::Pending))
            .exec(&self.db)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            warn!(%id, "Status update lost a concurrent race");
            return Err(LedgerError::ConcurrentModification(id));
        }

        info!(%id, decided_by = decided_by.member_id, "Transaction status updated");
        self.get(id).await
    }

    /// Replaces amount and payment date of an opening balance in place.
    ///
    /// `id`, `created_by` and `created_at` never change.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The new amount is not positive
    /// - Transaction is not found
    /// - Transaction is not an opening balance (`NotOpeningBalance`)
    /// - Database operation fails
    #[instrument(skip(self))]
    pub async fn replace_fields(
        &self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> Result<Transaction, LedgerError> {
        validate_patch(&patch)?;
        let model = apply_patch(&self.db, id, &patch).await?;
        info!(%id, amount = %patch.amount, "Opening balance replaced");
        Ok(model.into())
    }

    /// Per-payment-method totals over approved transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn balances(
        &self,
        methods: &PaymentMethodSet,
    ) -> Result<Vec<PaymentMethodBalance>, LedgerError> {
        let approved = self
            .query(&TransactionFilter {
                status: Some(TransactionStatus::Approved),
                ..Default::default()
            })
            .await?;
        Ok(summarize_balances(methods, &approved))
    }
}

/// Current time at the precision the database keeps.
pub(crate) fn timestamp() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).into()
}

/// Returns true if `err` is a unique constraint violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn insert_error(err: DbErr, new: &NewTransaction) -> LedgerError {
    if new.is_opening_balance && is_unique_violation(&err) {
        LedgerError::DuplicateOpeningBalance(new.payment_method.to_string())
    } else {
        LedgerError::Database(err.to_string())
    }
}

fn filtered(filter: &TransactionFilter) -> Select<transactions::Entity> {
    let mut select = transactions::Entity::find();
    if let Some(kind) = filter.kind {
        select = select.filter(transactions::Column::Kind.eq(DbTransactionKind::from(kind)));
    }
    if let Some(status) = filter.status {
        select = select.filter(transactions::Column::Status.eq(DbTransactionStatus::from(status)));
    }
    if let Some(method) = &filter.payment_method {
        select = select.filter(transactions::Column::PaymentMethod.eq(method.as_str()));
    }
    if let Some(drive_id) = filter.drive_id {
        select = select.filter(transactions::Column::DriveId.eq(drive_id));
    }
    if let Some(is_opening_balance) = filter.is_opening_balance {
        select = select.filter(transactions::Column::IsOpeningBalance.eq(is_opening_balance));
    }
    select
}

pub(crate) async fn find_transaction<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<transactions::Model>, DbErr> {
    transactions::Entity::find_by_id(id).one(conn).await
}

pub(crate) async fn insert_transaction<C: ConnectionTrait>(
    conn: &C,
    new: &NewTransaction,
) -> Result<transactions::Model, DbErr> {
    let now = timestamp();
    let method = new.payment_method.as_str().to_string();

    let model = transactions::ActiveModel {
        id: Set(Uuid::now_v7()),
        kind: Set(new.kind.into()),
        amount: Set(new.amount),
        description: Set(new.description.clone()),
        description_hi: Set(new.description_hi.clone()),
        opening_balance_method: Set(new.is_opening_balance.then(|| method.clone())),
        payment_method: Set(method),
        payment_date: Set(new.payment_date),
        status: Set(new.status.into()),
        member_id: Set(new.member_id),
        drive_id: Set(new.drive_id),
        is_opening_balance: Set(new.is_opening_balance),
        created_by: Set(new.created_by),
        created_at: Set(now),
        updated_at: Set(now),
        decided_by: Set(None),
        decided_role: Set(None),
        decided_at: Set(None),
    };

    model.insert(conn).await
}

pub(crate) async fn apply_patch<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    patch: &TransactionPatch,
) -> Result<transactions::Model, LedgerError> {
    let changes = transactions::ActiveModel {
        amount: Set(patch.amount),
        payment_date: Set(patch.payment_date),
        updated_at: Set(timestamp()),
        ..Default::default()
    };

    let result = transactions::Entity::update_many()
        .set(changes)
        .filter(transactions::Column::Id.eq(id))
        .filter(transactions::Column::IsOpeningBalance.eq(true))
        .exec(conn)
        .await
        .map_err(|e| LedgerError::Database(e.to_string()))?;

    let model = find_transaction(conn, id)
        .await
        .map_err(|e| LedgerError::Database(e.to_string()))?
        .ok_or(LedgerError::TransactionNotFound(id))?;

    if result.rows_affected == 0 {
        return Err(LedgerError::NotOpeningBalance(id));
    }

    Ok(model)
}
