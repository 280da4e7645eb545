//! `SeaORM` entity definitions.

pub mod prelude;

pub mod contribution_drives;
pub mod sea_orm_active_enums;
pub mod transactions;
