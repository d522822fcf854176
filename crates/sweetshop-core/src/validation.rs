//! # Validation Module
//!
//! Input validation for products entering the cart and for catalog queries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load                                                 │
//! │  └── Cards with empty titles or bad prices are rejected up front       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart::add_item                                               │
//! │  └── THIS MODULE again: nothing malformed reaches the registry         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sweetshop_core::validation::{validate_product_title, validate_unit_price};
//!
//! validate_product_title("Kaju Katli").unwrap();
//! validate_unit_price(12.5).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted catalog search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product display title.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
///
/// ## Example
/// ```rust
/// use sweetshop_core::validation::validate_product_title;
///
/// assert!(validate_product_title("Ladoo").is_ok());
/// assert!(validate_product_title("   ").is_err());
/// ```
pub fn validate_product_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog search query.
///
/// ## Rules
/// - Can be empty (matches every card)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed, lower-cased query used for matching.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_lowercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (NaN and infinities are rejected)
/// - Must be non-negative; zero is allowed (free samples)
///
/// ## Example
/// ```rust
/// use sweetshop_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(10.0).is_ok());
/// assert!(validate_unit_price(0.0).is_ok());
/// assert!(validate_unit_price(-1.0).is_err());
/// assert!(validate_unit_price(f64::NAN).is_err());
/// ```
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "unit price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
