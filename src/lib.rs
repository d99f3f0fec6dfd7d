//! Payrail - In-memory accounts ledger
//!
//! Executes funds transfers between accounts with strict consistency
//! guarantees under concurrent access. The transfer engine locks the two
//! involved accounts in a deterministic total order, so opposing transfers
//! over the same pair can never deadlock.
//!
//! # Modules
//!
//! - [`account`] - Account entity and identifier validation
//! - [`ledger`] - Concurrent account repository
//! - [`transfer`] - Deadlock-free transfer engine
//! - [`notification`] - Post-transfer notification port
//! - [`service`] - Service facade wiring ledger, engine and notifications
//! - [`gateway`] - Axum HTTP adapter
//! - [`config`] - Application configuration
//! - [`logging`] - Tracing setup

pub mod account;
pub mod config;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod notification;
pub mod service;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountId, AccountView, ValidationError};
pub use ledger::{Ledger, LedgerError};
pub use notification::{LogNotifier, NotificationPort};
pub use service::{AccountsService, ServiceError};
pub use transfer::{TransferEngine, TransferError, TransferOutcome};
