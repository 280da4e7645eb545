//! Helpers for driving the router in tests.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use samiti_db::migration::{Migrator, MigratorTrait};
use samiti_shared::LedgerConfig;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

use crate::middleware::{ACTOR_ID_HEADER, ACTOR_ROLE_HEADER};
use crate::{AppState, create_router};

pub const MEMBER: (i64, &str) = (9, "member");
pub const TREASURER: (i64, &str) = (1, "treasurer");
pub const SECRETARY: (i64, &str) = (2, "secretary");
pub const PRESIDENT: (i64, &str) = (3, "president");

/// State over a fresh in-memory database with migrations applied.
pub async fn state() -> AppState {
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

    AppState::new(db, &LedgerConfig::default())
}

pub async fn app() -> Router {
    create_router(state().await)
}

/// Sends one request and returns the status with the JSON body (`Null` if empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    actor: Option<(i64, &str)>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((id, role)) = actor {
        builder = builder
            .header(ACTOR_ID_HEADER, id.to_string())
            .header(ACTOR_ROLE_HEADER, role);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Reads a decimal serialized as a JSON string.
pub fn decimal(value: &Value) -> rust_decimal::Decimal {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("expected a decimal string, got {value}"))
}
