//! Contribution drive repository and progress aggregator.

use samiti_core::drive::{
    Drive, DriveError, DriveProgress, MemberRegistry, NewDrive, contributions_for,
};
use samiti_core::ledger::{TransactionFilter, TransactionKind};
use samiti_core::workflow::TransactionStatus;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{info, instrument};

use super::ledger::{TransactionRepository, timestamp};
use crate::entities::contribution_drives;

/// Drive repository.
#[derive(Debug, Clone)]
pub struct DriveRepository {
    db: DatabaseConnection,
}

impl DriveRepository {
    /// Creates a new drive repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new drive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub async fn create(&self, new: NewDrive) -> Result<Drive, DriveError> {
        let model = contribution_drives::ActiveModel {
            title: Set(new.title),
            title_hi: Set(new.title_hi),
            description: Set(new.description),
            description_hi: Set(new.description_hi),
            amount_per_member: Set(new.amount_per_member),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            total_members: Set(new.total_members),
            created_by: Set(new.created_by),
            created_at: Set(timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| DriveError::Database(e.to_string()))?;

        info!(id = model.id, "Drive created");
        Ok(model.into())
    }

    /// Fetches a drive by id.
    ///
    /// # Errors
    ///
    /// Returns `DriveNotFound` for an unknown id.
    pub async fn get(&self, id: i64) -> Result<Drive, DriveError> {
        contribution_drives::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DriveError::Database(e.to_string()))?
            .map(Into::into)
            .ok_or(DriveError::DriveNotFound(id))
    }

    /// Lists all drives ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Drive>, DriveError> {
        let models = contribution_drives::Entity::find()
            .order_by_asc(contribution_drives::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DriveError::Database(e.to_string()))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Computes live collection progress for a drive.
    ///
    /// Reads committed transactions first, then asks `registry` for the
    /// member count. No database transaction is open during that call.
    ///
    /// # Errors
    ///
    /// Returns an error if the drive is unknown, the registry fails, or the
    /// database query fails.
    pub async fn progress(
        &self,
        drive_id: i64,
        registry: &dyn MemberRegistry,
    ) -> Result<DriveProgress, DriveError> {
        let drive = self.get(drive_id).await?;

        let transactions = TransactionRepository::new(self.db.clone())
            .query(&TransactionFilter {
                kind: Some(TransactionKind::Income),
                status: Some(TransactionStatus::Approved),
                drive_id: Some(drive_id),
                ..Default::default()
            })
            .await
            .map_err(|e| DriveError::Database(e.to_string()))?;

        let total_members = registry.total_members(&drive).await?;

        Ok(DriveProgress::compute(
            drive.id,
            drive.amount_per_member,
            total_members,
            &contributions_for(drive.id, &transactions),
        ))
    }
}
