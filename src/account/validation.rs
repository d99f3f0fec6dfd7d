//! Account identifier and input validation
//!
//! Identifiers are enforced through a newtype with a private field, so every
//! `AccountId` in the system has passed validation through `new()`.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Maximum length of an account identifier, in bytes.
pub const MAX_ACCOUNT_ID_LEN: usize = 64;

/// Validation errors raised before any ledger state is touched.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Account id cannot be empty")]
    EmptyAccountId,

    #[error("Account id too long: max {max} bytes, got {actual}")]
    IdTooLong { max: usize, actual: usize },

    #[error("Account id contains invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("Initial balance cannot be negative: {0}")]
    NegativeBalance(Decimal),
}

/// Validated account identifier
///
/// Fields are private to force validation through `new()`. The identifier is
/// immutable, unique across the ledger, and doubles as the comparison key for
/// lock ordering in the transfer engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a validated AccountId
    ///
    /// # Validation Rules
    /// - Trimmed, non-empty
    /// - At most [`MAX_ACCOUNT_ID_LEN`] bytes
    /// - Visible ASCII only (no whitespace or control characters)
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(id: &str) -> Result<Self, ValidationError> {
        let id = id.trim();

        if id.is_empty() {
            return Err(ValidationError::EmptyAccountId);
        }

        if id.len() > MAX_ACCOUNT_ID_LEN {
            return Err(ValidationError::IdTooLong {
                max: MAX_ACCOUNT_ID_LEN,
                actual: id.len(),
            });
        }

        if let Some(c) = id.chars().find(|c| !c.is_ascii_graphic()) {
            return Err(ValidationError::InvalidCharacter(c));
        }

        Ok(Self(id.to_string()))
    }

    /// Get the validated identifier as &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Initial balances must be non-negative before an account is registered.
///
/// The ledger trusts this has been checked by the service layer; the transfer
/// engine still re-checks amounts defensively.
pub fn validate_initial_balance(balance: Decimal) -> Result<(), ValidationError> {
    if balance.is_sign_negative() {
        return Err(ValidationError::NegativeBalance(balance));
    }
    Ok(())
}
