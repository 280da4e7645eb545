//! Opening balance rules.
//!
//! Each payment method carries at most one opening-balance entry: a
//! member-less, auto-approved income describing the account's starting
//! funds. Callers upsert it without knowing whether one exists; the store
//! picks the create or update path atomically using [`UpsertPlan`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::actor::Actor;
use crate::ledger::error::LedgerError;
use crate::ledger::types::{
    NewTransaction, PaymentMethod, PaymentMethodSet, Transaction, TransactionKind,
    TransactionPatch,
};
use crate::ledger::validation::{validate_amount, validate_new_transaction};
use crate::workflow::types::TransactionStatus;

/// Description given to every opening-balance entry.
pub const OPENING_BALANCE_DESCRIPTION: &str = "Opening Balance";

/// Raw upsert input.
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningBalanceInput {
    /// Payment method code.
    pub payment_method: String,
    /// Starting amount (must be positive).
    pub amount: Decimal,
    /// Date the balance was taken.
    pub payment_date: NaiveDate,
}

/// Validated upsert request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningBalanceRequest {
    /// Canonical payment method.
    pub payment_method: PaymentMethod,
    /// Starting amount.
    pub amount: Decimal,
    /// Date the balance was taken.
    pub payment_date: NaiveDate,
}

/// Which path an upsert takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertPlan {
    /// No opening balance exists for the method yet.
    Create,
    /// Replace amount and date of the existing entry in place.
    Update {
        /// The existing entry.
        id: Uuid,
    },
}

/// Stateless service for opening-balance rules.
pub struct OpeningBalanceService;

impl OpeningBalanceService {
    /// Validates an upsert request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a non-positive amount and
    /// `UnknownPaymentMethod` for a method outside the configured set.
    pub fn validate(
        input: &OpeningBalanceInput,
        methods: &PaymentMethodSet,
    ) -> Result<OpeningBalanceRequest, LedgerError> {
        let payment_method = methods.resolve(&input.payment_method)?;
        validate_amount(input.amount)?;
        Ok(OpeningBalanceRequest {
            payment_method,
            amount: input.amount,
            payment_date: input.payment_date,
        })
    }

    /// Chooses the create or update path given the current entry, if any.
    #[must_use]
    pub fn plan(existing: Option<&Transaction>) -> UpsertPlan {
        match existing {
            Some(tx) => UpsertPlan::Update { id: tx.id },
            None => UpsertPlan::Create,
        }
    }

    /// Builds the entry created when no opening balance exists.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the resulting entry breaks a ledger rule.
    pub fn new_transaction(
        request: &OpeningBalanceRequest,
        actor: &Actor,
    ) -> Result<NewTransaction, LedgerError> {
        let tx = NewTransaction {
            kind: TransactionKind::Income,
            amount: request.amount,
            description: OPENING_BALANCE_DESCRIPTION.to_string(),
            description_hi: OPENING_BALANCE_DESCRIPTION.to_string(),
            payment_method: request.payment_method.clone(),
            payment_date: request.payment_date,
            status: TransactionStatus::Approved,
            member_id: None,
            drive_id: None,
            is_opening_balance: true,
            created_by: actor.member_id,
        };
        validate_new_transaction(&tx)?;
        Ok(tx)
    }

    /// Fields replaced when an opening balance already exists.
    #[must_use]
    pub fn patch(request: &OpeningBalanceRequest) -> TransactionPatch {
        TransactionPatch {
            amount: request.amount,
            payment_date: request.payment_date,
        }
    }

    /// Maps every configured method to its opening balance, or `None`.
    ///
    /// Non-opening-balance transactions in `transactions` are ignored.
    #[must_use]
    pub fn collect_by_method(
        methods: &PaymentMethodSet,
        transactions: Vec<Transaction>,
    ) -> BTreeMap<String, Option<Transaction>> {
        let mut by_method: BTreeMap<String, Option<Transaction>> = methods
            .iter()
            .map(|m| (m.as_str().to_string(), None))
            .collect();

        for tx in transactions.into_iter().filter(|tx| tx.is_opening_balance) {
            by_method.insert(tx.payment_method.clone(), Some(tx));
        }

        by_method
    }
}
