//! # Error Types
//!
//! Domain-specific error types for sweetshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sweetshop-core errors (this file)                                     │
//! │  ├── CoreError        - Cart operation failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app)                                               │
//! │  └── ApiError         - What the event shell sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → User                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recoverable. A failing operation leaves the cart exactly
//! as it was before the call.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed product passed to `add_item`.
    ///
    /// ## When This Occurs
    /// - Title is empty or only whitespace
    /// - Unit price is negative, NaN or infinite
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ValidationError),

    /// Mutation referencing a line item that is not in the cart.
    ///
    /// ## When This Occurs
    /// A stale row reference after a re-render, e.g. a double click on
    /// the remove button. Callers may treat it as a no-op.
    #[error("Item not in cart: {0}")]
    UnknownItem(ProductId),

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,
}

impl CoreError {
    /// Returns true for errors that callers may swallow without telling
    /// the user.
    pub fn is_benign(&self) -> bool {
        matches!(self, CoreError::UnknownItem(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Number is NaN or infinite.
    #[error("{field} must be a finite number")]
    InvalidNumber { field: String },

    /// Number is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Structured input could not be parsed.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownItem(ProductId::derive("Ladoo", 0));
        assert_eq!(err.to_string(), "Item not in cart: Ladoo-0");

        assert_eq!(CoreError::EmptyCart.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        };
        assert_eq!(err.to_string(), "unit price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_invalid_product() {
        let err: CoreError = ValidationError::InvalidNumber {
            field: "unit price".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::InvalidProduct(_)));
        assert!(!err.is_benign());
    }

    #[test]
    fn test_only_unknown_item_is_benign() {
        assert!(CoreError::UnknownItem(ProductId::derive("Barfi", 2)).is_benign());
        assert!(!CoreError::EmptyCart.is_benign());
    }
}
