//! Request DTOs
//!
//! Field names follow the wire contract consumed by existing clients
//! (camelCase).

use serde::Deserialize;

use super::money::StrictDecimal;

/// POST /v1/accounts
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: String,
    pub balance: StrictDecimal,
}

/// POST /v1/accounts/transfers/payment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransferRequest {
    pub account_from: String,
    pub account_to: String,
    pub amount: StrictDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_request_wire_format() {
        let req: CreateAccountRequest =
            serde_json::from_str(r#"{"accountId":"Id-123","balance":"1000"}"#).unwrap();
        assert_eq!(req.account_id, "Id-123");
        assert_eq!(req.balance.inner(), 1000.into());
    }

    #[test]
    fn test_transfer_request_wire_format() {
        let req: PaymentTransferRequest = serde_json::from_str(
            r#"{"accountFrom":"456","accountTo":"789","amount":"100.00"}"#,
        )
        .unwrap();
        assert_eq!(req.account_from, "456");
        assert_eq!(req.account_to, "789");
        assert_eq!(req.amount.inner(), "100.00".parse().unwrap());
    }

    #[test]
    fn test_transfer_request_rejects_negative_amount() {
        let res: Result<PaymentTransferRequest, _> = serde_json::from_str(
            r#"{"accountFrom":"456","accountTo":"789","amount":"-100"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(serde_json::from_str::<CreateAccountRequest>(r#"{"balance":"1000"}"#).is_err());
        assert!(serde_json::from_str::<CreateAccountRequest>(r#"{"accountId":"Id-123"}"#).is_err());
    }
}
