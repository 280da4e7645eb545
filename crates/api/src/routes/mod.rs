//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::actor_middleware};

pub mod balances;
pub mod drives;
pub mod health;
pub mod opening_balances;
pub mod transactions;

/// Creates the API router with all routes.
///
/// Everything except the health check requires an identified actor.
pub fn api_routes() -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(transactions::routes())
        .merge(opening_balances::routes())
        .merge(drives::routes())
        .merge(balances::routes())
        .layer(middleware::from_fn(actor_middleware));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}
