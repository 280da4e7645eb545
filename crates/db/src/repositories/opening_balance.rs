//! Opening balance manager.
//!
//! Upsert runs inside a database transaction. If two callers race to
//! create the first opening balance for a method, the unique index on
//! `opening_balance_method` rejects the loser, which then takes the
//! update path once. A second loss surfaces as a conflict.

use std::collections::BTreeMap;

use samiti_core::actor::Actor;
use samiti_core::ledger::{LedgerError, PaymentMethodSet, Transaction, TransactionFilter};
use samiti_core::opening_balance::{
    OpeningBalanceInput, OpeningBalanceRequest, OpeningBalanceService, UpsertPlan,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use tracing::{info, instrument, warn};

use super::ledger::{TransactionRepository, apply_patch, insert_transaction, is_unique_violation};
use crate::entities::transactions;

/// Opening balance repository.
#[derive(Debug, Clone)]
pub struct OpeningBalanceRepository {
    db: DatabaseConnection,
    methods: PaymentMethodSet,
}

impl OpeningBalanceRepository {
    /// Creates a new opening balance repository over the configured methods.
    #[must_use]
    pub const fn new(db: DatabaseConnection, methods: PaymentMethodSet) -> Self {
        Self { db, methods }
    }

    /// Maps every configured payment method to its opening balance, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all(&self) -> Result<BTreeMap<String, Option<Transaction>>, LedgerError> {
        let entries = TransactionRepository::new(self.db.clone())
            .query(&TransactionFilter {
                is_opening_balance: Some(true),
                ..Default::default()
            })
            .await?;

        Ok(OpeningBalanceService::collect_by_method(
            &self.methods,
            entries,
        ))
    }

    /// Creates or updates the opening balance for a payment method.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Amount is not positive or the method is unknown
    /// - A concurrent creator won twice in a row (`DuplicateOpeningBalance`)
    /// - Database operation fails
    #[instrument(skip(self, input), fields(payment_method = %input.payment_method))]
    pub async fn upsert(
        &self,
        input: OpeningBalanceInput,
        actor: Actor,
    ) -> Result<Transaction, LedgerError> {
        let request = OpeningBalanceService::validate(&input, &self.methods)?;
        self.upsert_planned(&request, &actor, OpeningBalanceService::plan)
            .await
    }

    /// Runs the upsert, retrying once on the update path after losing a
    /// create race. `plan` picks the path from the entry read in each attempt.
    async fn upsert_planned<P>(
        &self,
        request: &OpeningBalanceRequest,
        actor: &Actor,
        mut plan: P,
    ) -> Result<Transaction, LedgerError>
    where
        P: FnMut(Option<&Transaction>) -> UpsertPlan,
    {
        match self.upsert_once(request, actor, &mut plan).await {
            Err(LedgerError::DuplicateOpeningBalance(method)) => {
                warn!(%method, "Lost opening balance create race, retrying as update");
                self.upsert_once(request, actor, &mut plan).await
            }
            other => other,
        }
    }

    async fn upsert_once<P>(
        &self,
        request: &OpeningBalanceRequest,
        actor: &Actor,
        plan: &mut P,
    ) -> Result<Transaction, LedgerError>
    where
        P: FnMut(Option<&Transaction>) -> UpsertPlan,
    {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        let existing: Option<Transaction> = transactions::Entity::find()
            .filter(
                transactions::Column::OpeningBalanceMethod.eq(request.payment_method.as_str()),
            )
            .one(&txn)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?
            .map(Into::into);

        let model = match plan(existing.as_ref()) {
            UpsertPlan::Create => {
                let new = OpeningBalanceService::new_transaction(request, actor)?;
                let model = insert_transaction(&txn, &new).await.map_err(|e| {
                    if is_unique_violation(&e) {
                        LedgerError::DuplicateOpeningBalance(request.payment_method.to_string())
                    } else {
                        LedgerError::Database(e.to_string())
                    }
                })?;
                info!(id = %model.id, "Opening balance created");
                model
            }
            UpsertPlan::Update { id } => {
                let model = apply_patch(&txn, id, &OpeningBalanceService::patch(request)).await?;
                info!(%id, "Opening balance updated");
                model
            }
        };

        txn.commit()
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?;

        Ok(model.into())
    }
}
