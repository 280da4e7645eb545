//! Contribution drive domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields for a new drive.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveDraft {
    /// Title.
    pub title: String,
    /// Hindi title; falls back to `title` when blank.
    #[serde(default)]
    pub title_hi: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Hindi description; falls back to `description` when blank.
    #[serde(default)]
    pub description_hi: Option<String>,
    /// Contribution expected from each member.
    pub amount_per_member: Decimal,
    /// First day of the drive.
    pub start_date: NaiveDate,
    /// Last day of the drive; `None` means open-ended.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Snapshot of eligible contributing members.
    pub total_members: i64,
}

/// A validated drive ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrive {
    /// Title.
    pub title: String,
    /// Hindi title.
    pub title_hi: String,
    /// Description.
    pub description: String,
    /// Hindi description.
    pub description_hi: String,
    /// Contribution expected from each member.
    pub amount_per_member: Decimal,
    /// First day of the drive.
    pub start_date: NaiveDate,
    /// Last day of the drive.
    pub end_date: Option<NaiveDate>,
    /// Snapshot of eligible contributing members.
    pub total_members: i64,
    /// Member who created the drive.
    pub created_by: i64,
}

/// A stored drive. Its terms never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drive {
    /// Drive ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Hindi title.
    pub title_hi: String,
    /// Description.
    pub description: String,
    /// Hindi description.
    pub description_hi: String,
    /// Contribution expected from each member.
    pub amount_per_member: Decimal,
    /// First day of the drive.
    pub start_date: NaiveDate,
    /// Last day of the drive.
    pub end_date: Option<NaiveDate>,
    /// Snapshot of eligible contributing members.
    pub total_members: i64,
    /// Member who created the drive.
    pub created_by: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// One approved income counted toward a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    /// Contributing member, if any.
    pub member_id: Option<i64>,
    /// Amount contributed.
    pub amount: Decimal,
}

/// Collection progress of a drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveProgress {
    /// Drive ID.
    pub drive_id: i64,
    /// Sum of approved income for the drive (not clamped).
    pub collected_amount: Decimal,
    /// `amount_per_member × total_members`.
    pub target_amount: Decimal,
    /// `collected / target × 100`, clamped to `[0, 100]`.
    pub collection_percentage: Decimal,
    /// Distinct contributing members.
    pub contributors_count: u64,
    /// Eligible members at call time.
    pub total_members: i64,
}
