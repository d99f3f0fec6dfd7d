//! API error responses
//!
//! Domain errors map onto HTTP statuses with stable machine-readable codes;
//! success payloads are the domain snapshots themselves.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::ledger::LedgerError;
use crate::service::ServiceError;
use crate::transfer::TransferError;

/// Handler result: success payload or structured API error.
pub type ApiResult<T> = Result<T, ApiError>;

/// Structured API error
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ApiErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let code = match &err {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::Ledger(LedgerError::DuplicateAccount(_)) => "DUPLICATE_ACCOUNT",
            ServiceError::Transfer(e) => e.code(),
        };
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, code, err.to_string())
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        ServiceError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountId, ValidationError};

    #[test]
    fn test_validation_error_maps_to_400() {
        let api: ApiError = ServiceError::Validation(ValidationError::EmptyAccountId).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_duplicate_account_maps_to_400() {
        let id = AccountId::new("Id-123").unwrap();
        let api: ApiError = ServiceError::Ledger(LedgerError::DuplicateAccount(id)).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "DUPLICATE_ACCOUNT");
    }

    #[test]
    fn test_transfer_errors_keep_their_codes() {
        let api: ApiError = TransferError::SourceAccountNotFound("x".into()).into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.code, "SOURCE_ACCOUNT_NOT_FOUND");

        let api: ApiError = TransferError::InsufficientFunds {
            account: "x".into(),
            balance: rust_decimal::Decimal::ZERO,
            requested: rust_decimal::Decimal::ONE,
        }
        .into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "INSUFFICIENT_FUNDS");
    }
}
