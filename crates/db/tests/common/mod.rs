//! Shared setup for repository integration tests.
//!
//! Every test gets its own in-memory SQLite database with migrations applied.

#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use samiti_core::actor::{Actor, ActorRole};
use samiti_core::drive::{Drive, DriveDraft, DriveService};
use samiti_core::ledger::{PaymentMethodSet, TransactionDraft};
use samiti_db::DriveRepository;
use samiti_db::migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Connects to a fresh in-memory database and runs all migrations.
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn methods() -> PaymentMethodSet {
    PaymentMethodSet::default()
}

pub fn treasurer() -> Actor {
    Actor::new(1, ActorRole::Treasurer)
}

pub fn secretary() -> Actor {
    Actor::new(2, ActorRole::Secretary)
}

pub fn member(id: i64) -> Actor {
    Actor::new(id, ActorRole::Member)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn draft(amount: Decimal, method: &str) -> TransactionDraft {
    TransactionDraft {
        amount,
        description: "Test entry".to_string(),
        description_hi: None,
        payment_method: method.to_string(),
        payment_date: date(2024, 1, 15),
        member_id: None,
        drive_id: None,
    }
}

pub fn contribution(amount: Decimal, drive_id: i64, member_id: i64) -> TransactionDraft {
    TransactionDraft {
        member_id: Some(member_id),
        drive_id: Some(drive_id),
        ..draft(amount, "cash")
    }
}

/// Creates a drive with the given terms.
pub async fn create_drive(
    db: &DatabaseConnection,
    amount_per_member: Decimal,
    total_members: i64,
) -> Drive {
    let new = DriveService::prepare(
        DriveDraft {
            title: "Temple repair".to_string(),
            title_hi: None,
            description: "Roof and walls".to_string(),
            description_hi: None,
            amount_per_member,
            start_date: date(2024, 1, 1),
            end_date: Some(date(2024, 12, 31)),
            total_members,
        },
        &treasurer(),
    )
    .expect("valid drive");

    DriveRepository::new(db.clone())
        .create(new)
        .await
        .expect("Failed to create drive")
}
