//! Transfer error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Transfer failure modes
///
/// Every failure path leaves both balances untouched and releases any locks
/// that were taken. Errors carry stable machine-readable codes for API
/// responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("Amount cannot be negative")]
    InvalidAmount,

    #[error("Source and target account cannot be the same")]
    SameAccount,

    #[error("Source account not found: {0}")]
    SourceAccountNotFound(String),

    #[error("Target account not found: {0}")]
    TargetAccountNotFound(String),

    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: Decimal,
        requested: Decimal,
    },
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::SourceAccountNotFound(_) => "SOURCE_ACCOUNT_NOT_FOUND",
            TransferError::TargetAccountNotFound(_) => "TARGET_ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount
            | TransferError::SameAccount
            | TransferError::InsufficientFunds { .. } => 400,
            TransferError::SourceAccountNotFound(_) | TransferError::TargetAccountNotFound(_) => {
                404
            }
        }
    }
}
