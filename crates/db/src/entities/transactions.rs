//! `SeaORM` Entity for transactions table.

use chrono::Utc;
use samiti_core::actor::ActorRole;
use samiti_core::ledger::Transaction;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{TransactionKind, TransactionStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: TransactionKind,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    pub description: String,
    pub description_hi: String,
    pub payment_method: String,
    pub payment_date: Date,
    pub status: TransactionStatus,
    pub member_id: Option<i64>,
    pub drive_id: Option<i64>,
    pub is_opening_balance: bool,
    // Set to `payment_method` on opening-balance rows only.
    #[sea_orm(unique)]
    pub opening_balance_method: Option<String>,
    pub created_by: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub decided_by: Option<i64>,
    pub decided_role: Option<String>,
    pub decided_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contribution_drives::Entity",
        from = "Column::DriveId",
        to = "super::contribution_drives::Column::Id"
    )]
    ContributionDrives,
}

impl Related<super::contribution_drives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributionDrives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Transaction {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            kind: m.kind.into(),
            amount: m.amount,
            description: m.description,
            description_hi: m.description_hi,
            payment_method: m.payment_method,
            payment_date: m.payment_date,
            status: m.status.into(),
            member_id: m.member_id,
            drive_id: m.drive_id,
            is_opening_balance: m.is_opening_balance,
            created_by: m.created_by,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
            decided_by: m.decided_by,
            decided_role: m.decided_role.as_deref().and_then(ActorRole::parse),
            decided_at: m.decided_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}
