//! Ledger domain types for transaction creation and retrieval.
//!
//! This module defines the core types used for creating, storing and
//! filtering income and expense transactions.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::actor::ActorRole;
use crate::ledger::error::LedgerError;
use crate::workflow::types::TransactionStatus;

/// Transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (contributions, opening balances).
    Income,
    /// Money going out; gated by the approval workflow.
    Expense,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A canonical payment method code.
///
/// Only obtainable through [`PaymentMethodSet::resolve`], so holding one
/// means the code is part of the configured set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    /// Returns the canonical code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical set of payment methods accepted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodSet {
    methods: Vec<PaymentMethod>,
}

impl PaymentMethodSet {
    /// Cash in hand.
    pub const CASH: &'static str = "cash";
    /// Bank account.
    pub const BANK_TRANSFER: &'static str = "bank_transfer";

    /// Builds a set from configured codes.
    ///
    /// Codes are trimmed and lowercased; blanks and duplicates are dropped
    /// and the configured order is kept.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods: Vec<PaymentMethod> = Vec::new();
        for code in codes {
            let code = normalize(code.as_ref());
            if code.is_empty() || methods.iter().any(|m| m.0 == code) {
                continue;
            }
            methods.push(PaymentMethod(code));
        }
        Self { methods }
    }

    /// Resolves a caller-supplied code to a canonical payment method.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for a blank code and `UnknownPaymentMethod`
    /// for a code outside the set.
    pub fn resolve(&self, code: &str) -> Result<PaymentMethod, LedgerError> {
        let code = normalize(code);
        if code.is_empty() {
            return Err(LedgerError::MissingField("payment_method"));
        }
        self.methods
            .iter()
            .find(|m| m.0 == code)
            .cloned()
            .ok_or(LedgerError::UnknownPaymentMethod(code))
    }

    /// Iterates over the methods in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter()
    }
}

impl Default for PaymentMethodSet {
    fn default() -> Self {
        Self::new([Self::CASH, Self::BANK_TRANSFER])
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Caller-supplied fields for a new income or expense.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDraft {
    /// Amount (must be positive).
    pub amount: Decimal,
    /// Description.
    pub description: String,
    /// Hindi description; falls back to `description` when blank.
    #[serde(default)]
    pub description_hi: Option<String>,
    /// Payment method code.
    pub payment_method: String,
    /// Date the funds moved.
    pub payment_date: NaiveDate,
    /// Contributing member.
    #[serde(default)]
    pub member_id: Option<i64>,
    /// Drive this transaction funds.
    #[serde(default)]
    pub drive_id: Option<i64>,
}

/// A validated transaction ready to be appended to the ledger store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Amount (positive).
    pub amount: Decimal,
    /// Description.
    pub description: String,
    /// Hindi description (never blank).
    pub description_hi: String,
    /// Canonical payment method.
    pub payment_method: PaymentMethod,
    /// Date the funds moved.
    pub payment_date: NaiveDate,
    /// Initial status.
    pub status: TransactionStatus,
    /// Contributing member.
    pub member_id: Option<i64>,
    /// Drive this transaction funds.
    pub drive_id: Option<i64>,
    /// Marks the synthetic opening-balance entry.
    pub is_opening_balance: bool,
    /// Member who created the entry.
    pub created_by: i64,
}

/// Fields the opening-balance flow may replace in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionPatch {
    /// New amount (positive).
    pub amount: Decimal,
    /// New payment date.
    pub payment_date: NaiveDate,
}

/// A transaction as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: Uuid,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Amount.
    pub amount: Decimal,
    /// Description.
    pub description: String,
    /// Hindi description.
    pub description_hi: String,
    /// Canonical payment method code.
    pub payment_method: String,
    /// Date the funds moved.
    pub payment_date: NaiveDate,
    /// Workflow status.
    pub status: TransactionStatus,
    /// Contributing member.
    pub member_id: Option<i64>,
    /// Drive this transaction funds.
    pub drive_id: Option<i64>,
    /// Marks the synthetic opening-balance entry.
    pub is_opening_balance: bool,
    /// Member who created the entry.
    pub created_by: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// Member who decided the expense.
    pub decided_by: Option<i64>,
    /// Role the decider held at decision time.
    pub decided_role: Option<ActorRole>,
    /// Decision time.
    pub decided_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Returns true if the transaction affects balances and aggregates.
    #[must_use]
    pub fn counts_toward_balances(&self) -> bool {
        self.status.counts_toward_balances()
    }
}

/// Filter for ledger queries. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionFilter {
    /// Match kind.
    #[serde(default)]
    pub kind: Option<TransactionKind>,
    /// Match status.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// Match canonical payment method code.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Match drive.
    #[serde(default)]
    pub drive_id: Option<i64>,
    /// Match the opening-balance tag.
    #[serde(default)]
    pub is_opening_balance: Option<bool>,
}

/// Listing order. Insertion order is `created_at`, ties broken by `id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionOrder {
    /// Oldest first.
    #[default]
    OldestFirst,
    /// Newest first.
    NewestFirst,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_payment_methods() {
        let set = PaymentMethodSet::default();
        let codes: Vec<&str> = set.iter().map(PaymentMethod::as_str).collect();
        assert_eq!(codes, vec!["cash", "bank_transfer"]);
    }

    #[test]
    fn test_payment_method_set_normalizes_and_dedupes() {
        let set = PaymentMethodSet::new([" Cash ", "cash", "", "UPI"]);
        assert_eq!(set.iter().count(), 2);
        assert_eq!(set.resolve("upi").unwrap().as_str(), "upi");
        assert_eq!(set.resolve("  CASH").unwrap().as_str(), "cash");
    }

    #[test]
    fn test_resolve_rejects_unknown_and_blank() {
        let set = PaymentMethodSet::default();
        assert!(matches!(
            set.resolve("bank"),
            Err(LedgerError::UnknownPaymentMethod(code)) if code == "bank"
        ));
        assert!(matches!(
            set.resolve("   "),
            Err(LedgerError::MissingField("payment_method"))
        ));
        assert!(set.resolve("bank_transfer").is_ok());
    }

    fn sample(status: TransactionStatus) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: Uuid::nil(),
            kind: TransactionKind::Income,
            amount: dec!(500),
            description: "Contribution".into(),
            description_hi: "Contribution".into(),
            payment_method: "cash".into(),
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status,
            member_id: Some(3),
            drive_id: Some(7),
            is_opening_balance: false,
            created_by: 1,
            created_at: now,
            updated_at: now,
            decided_by: None,
            decided_role: None,
            decided_at: None,
        }
    }

    #[test]
    fn test_only_approved_counts() {
        assert!(sample(TransactionStatus::Approved).counts_toward_balances());
        assert!(!sample(TransactionStatus::Rejected).counts_toward_balances());
    }
}
