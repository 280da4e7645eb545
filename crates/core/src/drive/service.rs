//! Drive creation rules.

use super::error::DriveError;
use super::types::{DriveDraft, NewDrive};
use crate::actor::Actor;
use crate::ledger::validation::{is_storable_amount, localized_or};

/// Stateless service for preparing drives.
pub struct DriveService;

impl DriveService {
    /// Validates a draft and fills in localized fallbacks.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title, a per-member amount that
    /// is not positive or not storable to the paisa, an end date before the start date or a negative
    /// member count.
    pub fn prepare(draft: DriveDraft, created_by: &Actor) -> Result<NewDrive, DriveError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(DriveError::MissingField("title"));
        }
        if !is_storable_amount(draft.amount_per_member) {
            return Err(DriveError::InvalidAmountPerMember(draft.amount_per_member));
        }
        if let Some(end) = draft.end_date
            && end < draft.start_date
        {
            return Err(DriveError::InvalidDateRange {
                start: draft.start_date,
                end,
            });
        }
        if draft.total_members < 0 {
            return Err(DriveError::NegativeMemberCount(draft.total_members));
        }

        let description = draft.description.trim().to_string();
        Ok(NewDrive {
            title_hi: localized_or(draft.title_hi.as_deref(), &title),
            description_hi: localized_or(draft.description_hi.as_deref(), &description),
            title,
            description,
            amount_per_member: draft.amount_per_member,
            start_date: draft.start_date,
            end_date: draft.end_date,
            total_members: draft.total_members,
            created_by: created_by.member_id,
        })
    }
}
