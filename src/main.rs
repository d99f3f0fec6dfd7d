use std::env;
use std::sync::Arc;

use payrail::config::AppConfig;
use payrail::gateway::{self, state::AppState};
use payrail::ledger::Ledger;
use payrail::logging::init_logging;
use payrail::notification::LogNotifier;
use payrail::service::AccountsService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_name = env::args().nth(1).unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load(&env_name)?;
    let _guard = init_logging(&config);

    tracing::info!("starting payrail ({} config)", env_name);

    let ledger = Arc::new(Ledger::new());
    let service = Arc::new(AccountsService::new(ledger, Arc::new(LogNotifier)));

    gateway::run_server(&config.gateway, AppState::new(service)).await
}
