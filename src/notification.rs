//! Post-transfer notification port
//!
//! Notifications are a best-effort side effect fired after a transfer has
//! committed. A failing or slow notifier must never roll back or fail the
//! transfer, so the port has no error channel back into the ledger.

use async_trait::async_trait;

use crate::account::AccountView;

/// Outbound notification channel, invoked once per affected account after a
/// successful transfer.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify_transfer(&self, account: &AccountView, message: &str);
}

/// Default notifier: writes the notification to the log.
///
/// Stands in for a real delivery channel (email, push) in development and
/// tests.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationPort for LogNotifier {
    async fn notify_transfer(&self, account: &AccountView, message: &str) {
        tracing::info!(account_id = %account.account_id, "notify: {}", message);
    }
}
