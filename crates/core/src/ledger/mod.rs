//! Income and expense ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Domain types for transactions, drafts and query filters
//! - The canonical payment method set
//! - Business rule validation
//! - Per-payment-method balances
//! - Error types for ledger operations

pub mod balance;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{PaymentMethodBalance, summarize_balances};
pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{
    InsertionOrder, NewTransaction, PaymentMethod, PaymentMethodSet, Transaction, TransactionDraft,
    TransactionFilter, TransactionKind, TransactionPatch,
};
