//! Contribution drive routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use samiti_core::drive::{DriveDraft, DriveService};
use samiti_db::DriveRepository;
use serde_json::json;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::OfficeBearer;

/// Creates the drive routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/drives", get(list_drives).post(create_drive))
        .route("/drives/{id}", get(get_drive))
        .route("/drives/{id}/progress", get(drive_progress))
}

/// POST `/drives` - Start a contribution drive.
async fn create_drive(
    State(state): State<AppState>,
    OfficeBearer(actor): OfficeBearer,
    Json(draft): Json<DriveDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let new = DriveService::prepare(draft, &actor)?;
    let drive = DriveRepository::new((*state.db).clone()).create(new).await?;
    Ok((StatusCode::CREATED, Json(drive)))
}

/// GET `/drives` - List drives by id.
async fn list_drives(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let drives = DriveRepository::new((*state.db).clone()).list().await?;
    Ok(Json(json!({ "drives": drives })))
}

/// GET `/drives/{id}` - Fetch a drive.
async fn get_drive(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let drive = DriveRepository::new((*state.db).clone()).get(id).await?;
    Ok(Json(drive))
}

/// GET `/drives/{id}/progress` - Live collection progress.
async fn drive_progress(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let progress = DriveRepository::new((*state.db).clone())
        .progress(id, state.registry.as_ref())
        .await?;
    Ok(Json(progress))
}
