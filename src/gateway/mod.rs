//! Axum HTTP adapter
//!
//! Thin boundary over the accounts service; owns no domain logic. The router
//! is built separately from the server so tests can drive it in-process.

pub mod handlers;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health_check))
        .route("/v1/accounts", post(handlers::create_account))
        .route("/v1/accounts/{account_id}", get(handlers::get_account))
        .route(
            "/v1/accounts/transfers/payment",
            post(handlers::create_transfer),
        )
        .with_state(state)
}

/// Bind and serve until the process exits.
pub async fn run_server(config: &GatewayConfig, state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {} (port already in use?)", addr))?;

    tracing::info!("gateway listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("gateway server error")
}
