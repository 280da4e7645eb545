//! Ledger service for transaction preparation.
//!
//! Turns caller-supplied drafts into validated [`NewTransaction`]s. The
//! service is stateless; persistence happens in the db crate.

use super::error::LedgerError;
use super::types::{NewTransaction, PaymentMethodSet, TransactionDraft, TransactionKind};
use super::validation::{localized_or, require_text, validate_new_transaction};
use crate::actor::Actor;
use crate::workflow::service::WorkflowService;

/// Stateless service for preparing ledger transactions.
pub struct LedgerService;

impl LedgerService {
    /// Prepares a draft for appending to the ledger store.
    ///
    /// The status is derived from the kind: income is approved on creation,
    /// expenses start pending.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is not positive, the
    /// description is blank or the payment method is not configured.
    pub fn prepare(
        kind: TransactionKind,
        draft: TransactionDraft,
        created_by: &Actor,
        methods: &PaymentMethodSet,
    ) -> Result<NewTransaction, LedgerError> {
        let payment_method = methods.resolve(&draft.payment_method)?;
        let description = require_text("description", &draft.description)?;
        let description_hi = localized_or(draft.description_hi.as_deref(), &description);

        let tx = NewTransaction {
            kind,
            amount: draft.amount,
            description,
            description_hi,
            payment_method,
            payment_date: draft.payment_date,
            status: WorkflowService::initial_status(kind),
            member_id: draft.member_id,
            drive_id: draft.drive_id,
            is_opening_balance: false,
            created_by: created_by.member_id,
        };

        validate_new_transaction(&tx)?;
        Ok(tx)
    }
}
