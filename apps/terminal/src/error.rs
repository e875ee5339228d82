//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in Caixa POS                       │
//! │                                                                 │
//! │  Operator input                                                 │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Command function: Result<T, ApiError>                          │
//! │       │                                                         │
//! │       ├── Unknown sku ────── NOT_FOUND ──────────┐              │
//! │       ├── Bad amount ─────── VALIDATION_ERROR ───┼──► shell     │
//! │       ├── Empty-cart close ─ CART_ERROR ─────────┘   renders    │
//! │       │                                               message   │
//! │       ▼                                                         │
//! │  Success ──────────────────────────────────────► view rendered  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note how small this is compared to a networked register: cart mutations on
//! an absent line are no-ops by contract, so most operations cannot fail.

use serde::Serialize;
use thiserror::Error;

use caixa_core::{CoreError, ValidationError};

/// API error returned from shell commands.
///
/// ## Serialization
/// Serialized shape, should a frontend ever consume it over IPC:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found: 9999"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested sku does not exist in the catalog
    NotFound,

    /// Operator input failed validation (bad amount, unknown method)
    ValidationError,

    /// Cart is not in a state that allows the operation
    CartError,
}

impl ApiError {
    /// Creates a NOT_FOUND error for a missing catalog item.
    pub fn not_found(sku: &str) -> Self {
        ApiError {
            code: ErrorCode::NotFound,
            message: format!("Item not found: {sku}"),
        }
    }

    /// Creates a VALIDATION_ERROR with a custom message.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates a CART_ERROR with a custom message.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError {
            code: ErrorCode::CartError,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_) => ErrorCode::NotFound,
            CoreError::EmptyCart => ErrorCode::CartError,
            CoreError::DuplicateSku(_) | CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError {
            code,
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_maps_to_cart_error() {
        let api: ApiError = CoreError::EmptyCart.into();
        assert_eq!(api.code, ErrorCode::CartError);
    }

    #[test]
    fn test_serializes_with_screaming_snake_code() {
        let api = ApiError::not_found("9999");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Item not found: 9999");
    }
}
