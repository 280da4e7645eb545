//! `SeaORM` entity prelude.

pub use super::contribution_drives::Entity as ContributionDrives;
pub use super::transactions::Entity as Transactions;
