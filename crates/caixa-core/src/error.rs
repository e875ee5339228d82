//! # Error Types
//!
//! Domain-specific error types for caixa-core.
//!
//! ## Error Hierarchy
//! ```text
//! caixa-core errors (this file)
//! ├── CoreError        - General domain errors
//! └── ValidationError  - Input validation failures
//!
//! Terminal app errors (apps/terminal)
//! └── ApiError         - What the shell renders (serialized)
//!
//! Flow: ValidationError → CoreError → ApiError → shell
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, field name)
//! 3. Errors are enum variants, never String
//!
//! Note that most cart mutations do NOT produce errors at all: operating on
//! an absent sku is a silent no-op by contract, and an over-large discount is
//! absorbed by the floor-at-zero totals rule rather than rejected.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations. They should be caught by the
/// shell layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog item cannot be found by SKU.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Two catalog items were registered under the same SKU.
    #[error("Duplicate SKU in catalog: {0}")]
    DuplicateSku(String),

    /// Finalize was requested on an empty cart.
    ///
    /// The shell disables the finalize action while the cart is empty, so
    /// hitting this from the UI path means the guard was bypassed.
    #[error("Cannot finalize a sale with an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when catalog seed data or operator input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., non-numeric amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("1004".to_string());
        assert_eq!(err.to_string(), "Item not found: 1004");

        let err = CoreError::EmptyCart;
        assert_eq!(err.to_string(), "Cannot finalize a sale with an empty cart");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::MustNotBeNegative {
            field: "discount".to_string(),
        };
        assert_eq!(err.to_string(), "discount must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
