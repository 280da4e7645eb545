//! Business rule validation for ledger operations.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{NewTransaction, TransactionKind, TransactionPatch};
use crate::workflow::service::WorkflowService;

/// Decimal places kept by the amount columns.
pub const AMOUNT_SCALE: u32 = 2;

/// Exclusive upper bound of a storable amount (10^14, the integer range of
/// a `NUMERIC(16, 2)` column).
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(0x107A_4000, 0x5AF3, 0, false, 0);

/// Returns true if `amount` is positive and survives storage unchanged.
///
/// Trailing zeros do not count towards the scale, so `1.500` is accepted.
#[must_use]
pub fn is_storable_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount < AMOUNT_LIMIT && amount.normalize().scale() <= AMOUNT_SCALE
}

/// Validates that an amount is strictly positive and storable exactly.
///
/// # Errors
///
/// Returns `InvalidAmount` for zero or negative amounts, amounts with more
/// than two decimal places and amounts of 10^14 or more.
pub fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if !is_storable_amount(amount) {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}

/// Trims a required text field, rejecting blanks.
///
/// # Errors
///
/// Returns `MissingField` naming `field` if the value is blank.
pub fn require_text(field: &'static str, value: &str) -> Result<String, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Returns the localized text, or `fallback` if it is absent or blank.
#[must_use]
pub fn localized_or(localized: Option<&str>, fallback: &str) -> String {
    match localized.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

/// Validates a transaction before it is appended to the store.
///
/// # Errors
///
/// Returns an error if the amount is not positive, a required text field is
/// blank, the status does not fit the kind, or an opening balance is not a
/// member-less income.
pub fn validate_new_transaction(tx: &NewTransaction) -> Result<(), LedgerError> {
    validate_amount(tx.amount)?;
    require_text("description", &tx.description)?;
    require_text("description_hi", &tx.description_hi)?;

    if tx.status != WorkflowService::initial_status(tx.kind) {
        return Err(LedgerError::InconsistentStatus {
            kind: tx.kind,
            status: tx.status,
        });
    }

    if tx.is_opening_balance && (tx.kind != TransactionKind::Income || tx.member_id.is_some()) {
        return Err(LedgerError::InvalidOpeningBalance);
    }

    Ok(())
}

/// Validates an in-place field replacement.
///
/// # Errors
///
/// Returns `InvalidAmount` if the new amount is not positive.
pub fn validate_patch(patch: &TransactionPatch) -> Result<(), LedgerError> {
    validate_amount(patch.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::PaymentMethodSet;
    use crate::workflow::types::TransactionStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn make_tx(kind: TransactionKind, status: TransactionStatus) -> NewTransaction {
        NewTransaction {
            kind,
            amount: dec!(200),
            description: "Tent hire".into(),
            description_hi: "Tent hire".into(),
            payment_method: PaymentMethodSet::default().resolve("cash").unwrap(),
            payment_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status,
            member_id: None,
            drive_id: None,
            is_opening_balance: false,
            created_by: 1,
        }
    }

    #[test]
    fn test_positive_amount_accepted() {
        assert!(validate_amount(dec!(0.01)).is_ok());
        assert!(validate_amount(dec!(50000)).is_ok());
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(matches!(
            validate_amount(Decimal::ZERO),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_amount(dec!(-1)),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_limit_is_ten_to_the_fourteenth() {
        assert_eq!(AMOUNT_LIMIT, dec!(100000000000000));
    }

    #[test]
    fn test_amount_bounds() {
        assert!(validate_amount(dec!(99999999999999.99)).is_ok());
        assert!(validate_amount(dec!(1.500)).is_ok());
        assert!(matches!(
            validate_amount(dec!(100000000000000)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_amount(dec!(99999999999999999.99)),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_sub_paisa_amount_rejected() {
        assert!(matches!(
            validate_amount(dec!(0.001)),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_amount(dec!(10.125)),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_replacement_amount_bounded() {
        let patch = TransactionPatch {
            amount: dec!(0.001),
            payment_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        };
        assert!(matches!(
            validate_patch(&patch),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("title", "  Diwali  ").unwrap(), "Diwali");
        assert!(matches!(
            require_text("title", " \t "),
            Err(LedgerError::MissingField("title"))
        ));
    }

    #[test]
    fn test_localized_fallback() {
        assert_eq!(localized_or(None, "Rent"), "Rent");
        assert_eq!(localized_or(Some("   "), "Rent"), "Rent");
        assert_eq!(localized_or(Some(" किराया "), "Rent"), "किराया");
    }

    #[test]
    fn test_valid_transactions() {
        assert!(
            validate_new_transaction(&make_tx(TransactionKind::Expense, TransactionStatus::Pending))
                .is_ok()
        );
        assert!(
            validate_new_transaction(&make_tx(TransactionKind::Income, TransactionStatus::Approved))
                .is_ok()
        );
    }

    #[test]
    fn test_pending_income_rejected() {
        let result =
            validate_new_transaction(&make_tx(TransactionKind::Income, TransactionStatus::Pending));
        assert!(matches!(
            result,
            Err(LedgerError::InconsistentStatus { .. })
        ));
    }

    #[test]
    fn test_approved_expense_rejected() {
        let result =
            validate_new_transaction(&make_tx(TransactionKind::Expense, TransactionStatus::Approved));
        assert!(matches!(
            result,
            Err(LedgerError::InconsistentStatus { .. })
        ));
    }

    #[test]
    fn test_opening_balance_must_be_memberless_income() {
        let mut tx = make_tx(TransactionKind::Income, TransactionStatus::Approved);
        tx.is_opening_balance = true;
        assert!(validate_new_transaction(&tx).is_ok());

        tx.member_id = Some(3);
        assert!(matches!(
            validate_new_transaction(&tx),
            Err(LedgerError::InvalidOpeningBalance)
        ));
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut tx = make_tx(TransactionKind::Expense, TransactionStatus::Pending);
        tx.description = "  ".into();
        assert!(matches!(
            validate_new_transaction(&tx),
            Err(LedgerError::MissingField("description"))
        ));
    }
}
