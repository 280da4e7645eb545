//! Drive progress calculation.
//!
//! Progress is a pure projection over approved income tagged with the
//! drive. Expenses, pending and rejected entries never count.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::types::{Contribution, DriveProgress};
use crate::ledger::types::{Transaction, TransactionKind};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Extracts the contributions counted toward `drive_id`.
#[must_use]
pub fn contributions_for(drive_id: i64, transactions: &[Transaction]) -> Vec<Contribution> {
    transactions
        .iter()
        .filter(|tx| {
            tx.drive_id == Some(drive_id)
                && tx.kind == TransactionKind::Income
                && tx.counts_toward_balances()
        })
        .map(|tx| Contribution {
            member_id: tx.member_id,
            amount: tx.amount,
        })
        .collect()
}

/// `amount_per_member × total_members`, or zero if either factor is not positive.
///
/// Saturates at `Decimal::MAX` on overflow.
#[must_use]
pub fn target_amount(amount_per_member: Decimal, total_members: i64) -> Decimal {
    if amount_per_member <= Decimal::ZERO || total_members <= 0 {
        return Decimal::ZERO;
    }
    amount_per_member
        .checked_mul(Decimal::from(total_members))
        .unwrap_or(Decimal::MAX)
}

/// `collected / target × 100`, rounded to 2 places and clamped to `[0, 100]`.
///
/// A zero target yields 0.
#[must_use]
pub fn collection_percentage(collected: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO || collected <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if collected >= target {
        return HUNDRED;
    }
    collected
        .checked_mul(HUNDRED)
        .and_then(|scaled| scaled.checked_div(target))
        .map_or(HUNDRED, |pct| pct.round_dp(2))
        .clamp(Decimal::ZERO, HUNDRED)
}

impl DriveProgress {
    /// Computes progress from a drive's terms and its contributions.
    #[must_use]
    pub fn compute(
        drive_id: i64,
        amount_per_member: Decimal,
        total_members: i64,
        contributions: &[Contribution],
    ) -> Self {
        let collected_amount = contributions
            .iter()
            .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.amount));
        let contributors: HashSet<i64> = contributions.iter().filter_map(|c| c.member_id).collect();
        let target = target_amount(amount_per_member, total_members);

        Self {
            drive_id,
            collected_amount,
            target_amount: target,
            collection_percentage: collection_percentage(collected_amount, target),
            contributors_count: u64::try_from(contributors.len()).unwrap_or(u64::MAX),
            total_members,
        }
    }
}
