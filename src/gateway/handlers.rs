//! HTTP handlers for the accounts API
//!
//! Thin adapters: decode, delegate to the service, map errors. No domain
//! logic lives here.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::state::AppState;
use super::types::{ApiError, CreateAccountRequest, PaymentTransferRequest};
use crate::account::AccountView;
use crate::transfer::TransferOutcome;

/// Create account
///
/// POST /v1/accounts
pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountView>), ApiError> {
    let view = state
        .service
        .create_account(&req.account_id, req.balance.inner())?;
    tracing::info!(account_id = %view.account_id, "account created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// Get account snapshot
///
/// GET /v1/accounts/{account_id}
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountView>, ApiError> {
    state
        .service
        .get_account(&account_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Account not found: {}", account_id)))
}

/// Initiate payment transfer
///
/// POST /v1/accounts/transfers/payment
pub async fn create_transfer(
    State(state): State<AppState>,
    Json(req): Json<PaymentTransferRequest>,
) -> Result<(StatusCode, Json<TransferOutcome>), ApiError> {
    let outcome = state
        .service
        .transfer(&req.account_from, &req.account_to, req.amount.inner())
        .await?;
    tracing::info!(
        transfer_id = %outcome.transfer_id,
        from = %outcome.from.account_id,
        to = %outcome.to.account_id,
        "transfer committed"
    );
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Liveness probe
///
/// GET /v1/health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::notification::LogNotifier;
    use crate::service::AccountsService;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn state() -> AppState {
        let service = AccountsService::new(Arc::new(Ledger::new()), Arc::new(LogNotifier));
        AppState::new(Arc::new(service))
    }

    fn create_req(json: &str) -> Json<CreateAccountRequest> {
        Json(serde_json::from_str(json).unwrap())
    }

    fn transfer_req(json: &str) -> Json<PaymentTransferRequest> {
        Json(serde_json::from_str(json).unwrap())
    }

    #[tokio::test]
    async fn test_create_account_returns_201_with_snapshot() {
        let state = state();
        let (status, Json(view)) = create_account(
            State(state.clone()),
            create_req(r#"{"accountId":"Id-123","balance":"1000"}"#),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(view.account_id.as_str(), "Id-123");
        assert_eq!(view.balance, 1000.into());
    }

    #[tokio::test]
    async fn test_create_duplicate_account_returns_400() {
        let state = state();
        create_account(
            State(state.clone()),
            create_req(r#"{"accountId":"Id-123","balance":"1000"}"#),
        )
        .await
        .unwrap();

        let err = create_account(
            State(state),
            create_req(r#"{"accountId":"Id-123","balance":"1000"}"#),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "DUPLICATE_ACCOUNT");
    }

    #[tokio::test]
    async fn test_get_account_roundtrip_and_missing() {
        let state = state();
        create_account(
            State(state.clone()),
            create_req(r#"{"accountId":"Id-123","balance":"123.45"}"#),
        )
        .await
        .unwrap();

        let Json(view) = get_account(State(state.clone()), Path("Id-123".to_string()))
            .await
            .unwrap();
        assert_eq!(view.balance, "123.45".parse().unwrap());

        let err = get_account(State(state), Path("ghost".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_transfer_endpoint_moves_funds() {
        let state = state();
        create_account(
            State(state.clone()),
            create_req(r#"{"accountId":"456","balance":"200.00"}"#),
        )
        .await
        .unwrap();
        create_account(
            State(state.clone()),
            create_req(r#"{"accountId":"789","balance":"150.00"}"#),
        )
        .await
        .unwrap();

        let (status, Json(outcome)) = create_transfer(
            State(state.clone()),
            transfer_req(r#"{"accountFrom":"456","accountTo":"789","amount":"100.00"}"#),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(outcome.from.balance, "100.00".parse().unwrap());
        assert_eq!(outcome.to.balance, "250.00".parse().unwrap());

        // Overdraft is rejected and mutates nothing
        let err = create_transfer(
            State(state.clone()),
            transfer_req(r#"{"accountFrom":"456","accountTo":"789","amount":"1000.00"}"#),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "INSUFFICIENT_FUNDS");

        let Json(view) = get_account(State(state), Path("456".to_string()))
            .await
            .unwrap();
        assert_eq!(view.balance, "100.00".parse().unwrap());
    }

    #[tokio::test]
    async fn test_transfer_to_unknown_account_returns_404() {
        let state = state();
        create_account(
            State(state.clone()),
            create_req(r#"{"accountId":"456","balance":"200.00"}"#),
        )
        .await
        .unwrap();

        let err = create_transfer(
            State(state),
            transfer_req(r#"{"accountFrom":"456","accountTo":"ghost","amount":"10"}"#),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "TARGET_ACCOUNT_NOT_FOUND");
    }
}
