//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the ledger, approval workflow and drives
//! - Actor extraction and role gating middleware
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use samiti_core::drive::{MemberRegistry, SnapshotMemberRegistry};
use samiti_core::ledger::PaymentMethodSet;
use samiti_shared::LedgerConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Canonical payment methods accepted by the engine.
    pub payment_methods: PaymentMethodSet,
    /// Adapter labels mapped to canonical payment method codes.
    pub payment_method_aliases: Arc<HashMap<String, String>>,
    /// Source of live member counts for drive progress.
    pub registry: Arc<dyn MemberRegistry>,
}

impl AppState {
    /// Builds state from a connection and the ledger configuration.
    ///
    /// Drive progress uses each drive's member snapshot until a registry is
    /// supplied with [`AppState::with_registry`].
    #[must_use]
    pub fn new(db: DatabaseConnection, ledger: &LedgerConfig) -> Self {
        let aliases = ledger
            .payment_method_aliases
            .iter()
            .map(|(label, code)| (label.trim().to_lowercase(), code.trim().to_lowercase()))
            .collect();

        Self {
            db: Arc::new(db),
            payment_methods: PaymentMethodSet::new(&ledger.payment_methods),
            payment_method_aliases: Arc::new(aliases),
            registry: Arc::new(SnapshotMemberRegistry),
        }
    }

    /// Replaces the member registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn MemberRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Translates an adapter label (e.g. `bank`) into its canonical code.
    ///
    /// Unknown labels pass through untouched; the engine rejects them.
    #[must_use]
    pub fn canonical_payment_method(&self, label: &str) -> String {
        let key = label.trim().to_lowercase();
        self.payment_method_aliases
            .get(&key)
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_alias_translation() {
        let state = crate::test_support::state().await;

        assert_eq!(state.canonical_payment_method("bank"), "bank_transfer");
        assert_eq!(state.canonical_payment_method(" BANK "), "bank_transfer");
        assert_eq!(state.canonical_payment_method("cash"), "cash");
        assert_eq!(state.canonical_payment_method("cheque"), "cheque");
    }
}
