//! Property-based tests for ledger validation rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::service::LedgerService;
use super::types::{PaymentMethodSet, TransactionDraft, TransactionKind};
use super::validation::{AMOUNT_LIMIT, validate_amount};
use crate::actor::{Actor, ActorRole};
use crate::workflow::types::TransactionStatus;

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|paise| Decimal::new(-paise, 2))
}

/// Strategy to generate an amount at the top of the storable range.
fn large_amount() -> impl Strategy<Value = Decimal> {
    // 10^12.00 to 10^14 - 0.01
    (100_000_000_000_000i64..10_000_000_000_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy to generate a positive amount with a non-zero third or later
/// decimal place.
fn sub_paisa_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 3u32..=8).prop_filter_map("must keep sub-paisa digits", |(units, scale)| {
        let amount = Decimal::new(units, scale);
        (amount.normalize().scale() > 2).then_some(amount)
    })
}

/// Strategy to generate an amount at or above the storable range.
fn oversized_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64).prop_map(|paise| AMOUNT_LIMIT + Decimal::new(paise, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Income), Just(TransactionKind::Expense)]
}

fn draft(amount: Decimal, method: String) -> TransactionDraft {
    TransactionDraft {
        amount,
        description: "Generated".into(),
        description_hi: None,
        payment_method: method,
        payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        member_id: None,
        drive_id: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Positive amounts always pass validation.
    #[test]
    fn prop_positive_amount_accepted(amount in positive_amount()) {
        prop_assert!(validate_amount(amount).is_ok());
    }

    /// Amounts up to the column limit are kept exactly.
    #[test]
    fn prop_large_amount_accepted(amount in large_amount()) {
        prop_assert!(validate_amount(amount).is_ok());
    }

    /// Amounts finer than a paisa never reach the store.
    #[test]
    fn prop_sub_paisa_amount_rejected(amount in sub_paisa_amount(), kind in kind_strategy()) {
        let result = LedgerService::prepare(
            kind,
            draft(amount, "cash".into()),
            &Actor::new(1, ActorRole::Member),
            &PaymentMethodSet::default(),
        );
        prop_assert!(
            matches!(result, Err(LedgerError::InvalidAmount(_))),
            "Sub-paisa amount should be rejected, got: {:?}",
            result
        );
    }

    /// Amounts of 10^14 or more are validation errors, not storage errors.
    #[test]
    fn prop_oversized_amount_rejected(amount in oversized_amount()) {
        prop_assert!(matches!(
            validate_amount(amount),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    /// Zero and negative amounts are always rejected, for either kind.
    #[test]
    fn prop_non_positive_amount_rejected(
        amount in non_positive_amount(),
        kind in kind_strategy(),
    ) {
        let result = LedgerService::prepare(
            kind,
            draft(amount, "cash".into()),
            &Actor::new(1, ActorRole::Member),
            &PaymentMethodSet::default(),
        );
        prop_assert!(
            matches!(result, Err(LedgerError::InvalidAmount(_))),
            "Non-positive amount should be rejected, got: {:?}",
            result
        );
    }

    /// Income never enters pending; expenses always do.
    #[test]
    fn prop_initial_status_follows_kind(
        amount in positive_amount(),
        kind in kind_strategy(),
    ) {
        let tx = LedgerService::prepare(
            kind,
            draft(amount, "bank_transfer".into()),
            &Actor::new(1, ActorRole::Member),
            &PaymentMethodSet::default(),
        ).unwrap();

        match kind {
            TransactionKind::Income => prop_assert_eq!(tx.status, TransactionStatus::Approved),
            TransactionKind::Expense => prop_assert_eq!(tx.status, TransactionStatus::Pending),
        }
        prop_assert_eq!(tx.amount, amount);
    }

    /// Codes outside the configured set are rejected.
    #[test]
    fn prop_unknown_method_rejected(method in "[a-z]{3,12}") {
        prop_assume!(method != "cash");
        let result = LedgerService::prepare(
            TransactionKind::Income,
            draft(Decimal::ONE, method),
            &Actor::new(1, ActorRole::Member),
            &PaymentMethodSet::default(),
        );
        prop_assert!(
            matches!(result, Err(LedgerError::UnknownPaymentMethod(_))),
            "Unknown method should be rejected, got: {:?}",
            result
        );
    }
}
