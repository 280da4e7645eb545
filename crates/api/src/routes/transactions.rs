//! Transaction routes: income, expenses and the approval workflow.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use samiti_core::ledger::{
    InsertionOrder, LedgerService, TransactionDraft, TransactionFilter, TransactionKind,
};
use samiti_core::workflow::Decision;
use samiti_db::{TransactionRepository, WorkflowRepository};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::{CurrentActor, OfficeBearer};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/income", post(create_income))
        .route("/transactions/expense", post(create_expense))
        .route("/transactions/pending", get(list_pending))
        .route("/transactions/{id}", get(get_transaction))
        .route("/transactions/{id}/decision", post(decide_expense))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for deciding an expense.
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    /// `approved` or `rejected`.
    pub decision: String,
}

/// Query parameters for listing pending expenses.
#[derive(Debug, Default, Deserialize)]
pub struct PendingQuery {
    /// Filter by payment method.
    pub payment_method: Option<String>,
    /// Filter by drive.
    pub drive_id: Option<i64>,
    /// `oldest` (default) or `newest`.
    pub order: Option<String>,
}

fn parse_order(order: Option<&str>) -> Result<InsertionOrder, ApiError> {
    match order.map(|o| o.trim().to_lowercase()).as_deref() {
        None | Some("" | "oldest" | "oldest_first") => Ok(InsertionOrder::OldestFirst),
        Some("newest" | "newest_first") => Ok(InsertionOrder::NewestFirst),
        Some(other) => Err(ApiError::validation(
            "INVALID_ORDER",
            format!("Order must be 'oldest' or 'newest', got '{other}'"),
        )),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/transactions/income` - Record an income (approved immediately).
async fn create_income(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(mut draft): Json<TransactionDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.payment_method = state.canonical_payment_method(&draft.payment_method);
    let new = LedgerService::prepare(
        TransactionKind::Income,
        draft,
        &actor,
        &state.payment_methods,
    )?;

    let tx = TransactionRepository::new((*state.db).clone())
        .append(new)
        .await?;
    info!(id = %tx.id, member_id = ?tx.member_id, drive_id = ?tx.drive_id, "Income recorded");

    Ok((StatusCode::CREATED, Json(tx)))
}

/// POST `/transactions/expense` - Submit an expense for approval.
async fn create_expense(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(mut draft): Json<TransactionDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.payment_method = state.canonical_payment_method(&draft.payment_method);
    let tx = WorkflowRepository::new((*state.db).clone(), state.payment_methods.clone())
        .submit_expense(draft, actor)
        .await?;

    Ok((StatusCode::CREATED, Json(tx)))
}

/// POST `/transactions/{id}/decision` - Approve or reject a pending expense.
async fn decide_expense(
    State(state): State<AppState>,
    OfficeBearer(actor): OfficeBearer,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecisionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(decision) = Decision::parse(&payload.decision) else {
        return Err(ApiError::validation(
            "INVALID_DECISION",
            format!(
                "Decision must be 'approved' or 'rejected', got '{}'",
                payload.decision
            ),
        ));
    };

    let tx = WorkflowRepository::new((*state.db).clone(), state.payment_methods.clone())
        .decide(id, decision, actor)
        .await?;

    Ok(Json(tx))
}

/// GET `/transactions` - List transactions with filters, oldest first.
async fn list_transactions(
    State(state): State<AppState>,
    Query(mut filter): Query<TransactionFilter>,
) -> Result<impl IntoResponse, ApiError> {
    filter.payment_method = filter
        .payment_method
        .map(|m| state.canonical_payment_method(&m).trim().to_lowercase());

    let transactions = TransactionRepository::new((*state.db).clone())
        .query(&filter)
        .await?;

    Ok(Json(json!({ "transactions": transactions })))
}

/// GET `/transactions/pending` - List expenses awaiting a decision.
async fn list_pending(
    State(state): State<AppState>,
    Query(query): Query<PendingQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let order = parse_order(query.order.as_deref())?;
    let filter = TransactionFilter {
        payment_method: query
            .payment_method
            .map(|m| state.canonical_payment_method(&m).trim().to_lowercase()),
        drive_id: query.drive_id,
        ..Default::default()
    };

    let transactions = WorkflowRepository::new((*state.db).clone(), state.payment_methods.clone())
        .list_pending(filter, order)
        .await?;

    Ok(Json(json!({ "transactions": transactions })))
}

/// GET `/transactions/{id}` - Fetch a single transaction.
async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let tx = TransactionRepository::new((*state.db).clone())
        .get(id)
        .await?;
    Ok(Json(tx))
}
