//! Member registry collaborator.
//!
//! The engine does not own membership. At progress time it asks a
//! [`MemberRegistry`] how many members a drive counts. Callers must not
//! hold a store transaction across this call.

use async_trait::async_trait;

use super::error::DriveError;
use super::types::Drive;

/// Source of the live member count for a drive.
#[async_trait]
pub trait MemberRegistry: Send + Sync {
    /// Eligible contributing members for `drive` at call time.
    async fn total_members(&self, drive: &Drive) -> Result<i64, DriveError>;
}

/// Uses the member count captured when the drive was created.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotMemberRegistry;

#[async_trait]
impl MemberRegistry for SnapshotMemberRegistry {
    async fn total_members(&self, drive: &Drive) -> Result<i64, DriveError> {
        Ok(drive.total_members)
    }
}

/// Reports a fixed member count for every drive.
#[derive(Debug, Clone, Copy)]
pub struct FixedMemberRegistry {
    count: i64,
}

impl FixedMemberRegistry {
    /// Creates a registry answering `count`.
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self { count }
    }
}

#[async_trait]
impl MemberRegistry for FixedMemberRegistry {
    async fn total_members(&self, _drive: &Drive) -> Result<i64, DriveError> {
        if self.count < 0 {
            return Err(DriveError::Registry(format!(
                "registry reported a negative member count: {}",
                self.count
            )));
        }
        Ok(self.count)
    }
}
