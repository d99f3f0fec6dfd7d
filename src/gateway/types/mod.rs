//! Gateway types module
//!
//! Type-safe boundary between the wire and the domain:
//!
//! - [`StrictDecimal`]: format-validated decimal for API input
//! - Request DTOs mirroring the wire contract
//! - [`ApiError`] / [`ApiResult`]: error-to-status mapping
//!
//! ## Submodules
//! - [`money`]: strict decimal input type
//! - [`request`]: request DTOs
//! - [`response`]: error responses

pub mod money;
pub mod request;
pub mod response;

// Re-export commonly used types at module root
pub use money::StrictDecimal;
pub use request::{CreateAccountRequest, PaymentTransferRequest};
pub use response::{ApiError, ApiResult};
