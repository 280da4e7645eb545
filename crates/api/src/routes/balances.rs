//! Per-payment-method balances.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use samiti_db::TransactionRepository;
use serde_json::json;

use crate::AppState;
use crate::error::ApiError;

/// Creates the balance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/balances", get(list_balances))
}

/// GET `/balances` - Approved income, expense and balance per method.
async fn list_balances(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let balances = TransactionRepository::new((*state.db).clone())
        .balances(&state.payment_methods)
        .await?;
    Ok(Json(json!({ "balances": balances })))
}
