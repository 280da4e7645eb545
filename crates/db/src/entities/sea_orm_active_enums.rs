//! `SeaORM` active enums stored as short strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction kind column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransactionKind {
    /// Income.
    #[sea_orm(string_value = "income")]
    Income,
    /// Expense.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Transaction status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransactionStatus {
    /// Awaiting a decision.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Approved.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<samiti_core::ledger::TransactionKind> for TransactionKind {
    fn from(kind: samiti_core::ledger::TransactionKind) -> Self {
        match kind {
            samiti_core::ledger::TransactionKind::Income => Self::Income,
            samiti_core::ledger::TransactionKind::Expense => Self::Expense,
        }
    }
}

impl From<TransactionKind> for samiti_core::ledger::TransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Expense => Self::Expense,
        }
    }
}

impl From<samiti_core::workflow::TransactionStatus> for TransactionStatus {
    fn from(status: samiti_core::workflow::TransactionStatus) -> Self {
        match status {
            samiti_core::workflow::TransactionStatus::Pending => Self::Pending,
            samiti_core::workflow::TransactionStatus::Approved => Self::Approved,
            samiti_core::workflow::TransactionStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<TransactionStatus> for samiti_core::workflow::TransactionStatus {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Pending => Self::Pending,
            TransactionStatus::Approved => Self::Approved,
            TransactionStatus::Rejected => Self::Rejected,
        }
    }
}
