//! Account module
//!
//! Account entity plus identifier and input validation.

pub mod models;
pub mod validation;

// Re-export commonly used types
pub use models::{Account, AccountView};
pub use validation::{AccountId, MAX_ACCOUNT_ID_LEN, ValidationError, validate_initial_balance};
