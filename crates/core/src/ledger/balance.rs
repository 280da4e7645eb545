//! Per-payment-method balance calculation.
//!
//! Only approved transactions count: pending and rejected expenses have no
//! balance effect.

use rust_decimal::Decimal;
use serde::Serialize;

use super::types::{PaymentMethodSet, Transaction, TransactionKind};

/// Running totals for one payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodBalance {
    /// Canonical payment method code.
    pub payment_method: String,
    /// Sum of approved income.
    pub income: Decimal,
    /// Sum of approved expenses.
    pub expense: Decimal,
    /// `income - expense`.
    pub balance: Decimal,
}

impl PaymentMethodBalance {
    fn empty(payment_method: &str) -> Self {
        Self {
            payment_method: payment_method.to_string(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }

    fn apply(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Income => self.income += tx.amount,
            TransactionKind::Expense => self.expense += tx.amount,
        }
        self.balance = self.income - self.expense;
    }
}

/// Summarizes approved transactions per payment method.
///
/// Every configured method is reported, in configured order, even without
/// transactions. Methods found in the data but no longer configured follow
/// in order of first appearance.
#[must_use]
pub fn summarize_balances(
    methods: &PaymentMethodSet,
    transactions: &[Transaction],
) -> Vec<PaymentMethodBalance> {
    let mut balances: Vec<PaymentMethodBalance> = methods
        .iter()
        .map(|m| PaymentMethodBalance::empty(m.as_str()))
        .collect();

    for tx in transactions.iter().filter(|tx| tx.counts_toward_balances()) {
        match balances
            .iter_mut()
            .find(|b| b.payment_method == tx.payment_method)
        {
            Some(entry) => entry.apply(tx),
            None => {
                let mut entry = PaymentMethodBalance::empty(&tx.payment_method);
                entry.apply(tx);
                balances.push(entry);
            }
        }
    }

    balances
}
