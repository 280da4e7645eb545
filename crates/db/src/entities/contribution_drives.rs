//! `SeaORM` Entity for contribution_drives table.

use chrono::Utc;
use samiti_core::drive::Drive;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "contribution_drives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub title_hi: String,
    pub description: String,
    pub description_hi: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount_per_member: Decimal,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub total_members: i64,
    pub created_by: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Drive {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            title_hi: m.title_hi,
            description: m.description,
            description_hi: m.description_hi,
            amount_per_member: m.amount_per_member,
            start_date: m.start_date,
            end_date: m.end_date,
            total_members: m.total_members,
            created_by: m.created_by,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}
