//! Accounts service facade
//!
//! Validates input, delegates to the ledger and the transfer engine, and
//! fires post-commit notifications. The HTTP gateway talks only to this
//! layer.

use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

use crate::account::{Account, AccountId, AccountView, ValidationError, validate_initial_balance};
use crate::ledger::{Ledger, LedgerError};
use crate::notification::NotificationPort;
use crate::transfer::{TransferEngine, TransferError, TransferOutcome};

/// Errors surfaced to the adapter layer, one variant per taxonomy class.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl ServiceError {
    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::Validation(_) | ServiceError::Ledger(_) => 400,
            ServiceError::Transfer(e) => e.http_status(),
        }
    }
}

/// Facade over the ledger, transfer engine and notification port.
pub struct AccountsService {
    ledger: Arc<Ledger>,
    engine: TransferEngine,
    notifier: Arc<dyn NotificationPort>,
}

impl AccountsService {
    pub fn new(ledger: Arc<Ledger>, notifier: Arc<dyn NotificationPort>) -> Self {
        let engine = TransferEngine::new(Arc::clone(&ledger));
        Self {
            ledger,
            engine,
            notifier,
        }
    }

    /// The underlying ledger (exposed for administrative/test resets).
    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    /// Register a new account with its opening balance.
    pub fn create_account(
        &self,
        id: &str,
        initial_balance: Decimal,
    ) -> Result<AccountView, ServiceError> {
        let id = AccountId::new(id)?;
        validate_initial_balance(initial_balance)?;

        let account = self.ledger.create(Account::new(id, initial_balance))?;
        Ok(account.view())
    }

    /// Snapshot an account, if it exists.
    pub fn get_account(&self, id: &str) -> Option<AccountView> {
        let id = AccountId::new(id).ok()?;
        self.ledger.get(&id).map(|account| account.view())
    }

    /// Execute a transfer and notify both parties on success.
    ///
    /// Notifications run after the transfer has committed; they are
    /// best-effort and cannot undo it.
    pub async fn transfer(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<TransferOutcome, ServiceError> {
        let from = AccountId::new(from)?;
        let to = AccountId::new(to)?;

        let outcome = self.engine.transfer(&from, &to, amount)?;

        self.notifier
            .notify_transfer(
                &outcome.from,
                &format!("{} has been debited from your account", outcome.amount),
            )
            .await;
        self.notifier
            .notify_transfer(
                &outcome.to,
                &format!("{} has been credited to your account", outcome.amount),
            )
            .await;

        Ok(outcome)
    }
}
