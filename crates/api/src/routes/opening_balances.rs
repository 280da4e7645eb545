//! Opening balance routes.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use samiti_core::opening_balance::OpeningBalanceInput;
use samiti_db::OpeningBalanceRepository;
use serde_json::json;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::OfficeBearer;

/// Creates the opening balance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/opening-balances",
        get(list_opening_balances).post(upsert_opening_balance),
    )
}

/// GET `/opening-balances` - Opening balance per payment method, or null.
async fn list_opening_balances(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let balances = OpeningBalanceRepository::new((*state.db).clone(), state.payment_methods.clone())
        .get_all()
        .await?;
    Ok(Json(json!({ "opening_balances": balances })))
}

/// POST `/opening-balances` - Create or replace a method's opening balance.
async fn upsert_opening_balance(
    State(state): State<AppState>,
    OfficeBearer(actor): OfficeBearer,
    Json(mut input): Json<OpeningBalanceInput>,
) -> Result<impl IntoResponse, ApiError> {
    input.payment_method = state.canonical_payment_method(&input.payment_method);
    let tx = OpeningBalanceRepository::new((*state.db).clone(), state.payment_methods.clone())
        .upsert(input, actor)
        .await?;
    Ok(Json(tx))
}

#[cfg(test)]
mod integration_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{MEMBER, PRESIDENT, TREASURER, app, send};

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let app = app().await;

        let (status, empty) = send(&app, "GET", "/api/v1/opening-balances", Some(MEMBER), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(empty["opening_balances"]["cash"].is_null());
        assert!(empty["opening_balances"]["bank_transfer"].is_null());

        let (status, first) = send(
            &app,
            "POST",
            "/api/v1/opening-balances",
            Some(TREASURER),
            Some(json!({ "payment_method": "cash", "amount": "50000", "payment_date": "2024-01-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["is_opening_balance"], true);
        assert_eq!(first["status"], "approved");

        let (status, second) = send(
            &app,
            "POST",
            "/api/v1/opening-balances",
            Some(PRESIDENT),
            Some(json!({ "payment_method": "cash", "amount": "60000", "payment_date": "2024-02-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["id"], first["id"]);
        assert_eq!(second["payment_date"], "2024-02-01");

        let (_, all) = send(&app, "GET", "/api/v1/opening-balances", Some(MEMBER), None).await;
        assert_eq!(all["opening_balances"]["cash"]["id"], first["id"]);
        assert_eq!(all["opening_balances"]["cash"]["payment_date"], "2024-02-01");
    }

    #[tokio::test]
    async fn test_upsert_accepts_alias() {
        let app = app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/opening-balances",
            Some(TREASURER),
            Some(json!({ "payment_method": "bank", "amount": "1000", "payment_date": "2024-01-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["payment_method"], "bank_transfer");
    }

    #[tokio::test]
    async fn test_upsert_is_role_gated() {
        let app = app().await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/opening-balances",
            Some(MEMBER),
            Some(json!({ "payment_method": "cash", "amount": "100", "payment_date": "2024-01-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, all) = send(&app, "GET", "/api/v1/opening-balances", Some(MEMBER), None).await;
        assert!(all["opening_balances"]["cash"].is_null());
    }

    #[tokio::test]
    async fn test_upsert_rejects_unknown_method() {
        let app = app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/opening-balances",
            Some(TREASURER),
            Some(json!({ "payment_method": "upi", "amount": "100", "payment_date": "2024-01-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_PAYMENT_METHOD");
    }
}
