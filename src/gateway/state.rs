//! Shared gateway state

use std::sync::Arc;

use crate::service::AccountsService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountsService>,
}

impl AppState {
    pub fn new(service: Arc<AccountsService>) -> Self {
        Self { service }
    }
}
