//! Property-based tests for drive progress.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::progress::{collection_percentage, target_amount};
use super::types::{Contribution, DriveProgress};

fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn contributions() -> impl Strategy<Value = Vec<Contribution>> {
    prop::collection::vec(
        (prop::option::of(1i64..50), amount())
            .prop_map(|(member_id, amount)| Contribution { member_id, amount }),
        0..30,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The percentage never leaves [0, 100], even on over-collection.
    #[test]
    fn prop_percentage_in_bounds(
        per_member in amount(),
        total_members in 0i64..500,
        contributions in contributions(),
    ) {
        let progress = DriveProgress::compute(1, per_member, total_members, &contributions);
        prop_assert!(progress.collection_percentage >= Decimal::ZERO);
        prop_assert!(progress.collection_percentage <= Decimal::ONE_HUNDRED);
    }

    /// The collected amount is the plain sum, never clamped.
    #[test]
    fn prop_collected_is_sum(contributions in contributions(), per_member in amount()) {
        let expected: Decimal = contributions.iter().map(|c| c.amount).sum();
        let progress = DriveProgress::compute(1, per_member, 1, &contributions);
        prop_assert_eq!(progress.collected_amount, expected);
    }

    /// Contributors never exceed the number of contributions.
    #[test]
    fn prop_contributors_bounded(contributions in contributions()) {
        let progress = DriveProgress::compute(1, Decimal::ONE, 10, &contributions);
        prop_assert!(progress.contributors_count as usize <= contributions.len());
    }

    /// A zero target always yields zero percent.
    #[test]
    fn prop_zero_target_yields_zero(collected in amount()) {
        prop_assert_eq!(collection_percentage(collected, Decimal::ZERO), Decimal::ZERO);
        prop_assert_eq!(target_amount(collected, 0), Decimal::ZERO);
    }

    /// More money collected never lowers the percentage.
    #[test]
    fn prop_percentage_monotonic(a in amount(), b in amount(), target in amount()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(collection_percentage(low, target) <= collection_percentage(high, target));
    }
}
