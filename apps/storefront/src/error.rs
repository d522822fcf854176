//! # Error Types
//!
//! Unified error type for storefront commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell line ──► Command ──► CartStore                                  │
//! │                   │             │                                       │
//! │                   │             ├── CoreError::InvalidProduct ──┐       │
//! │                   │             ├── CoreError::UnknownItem ─────┤       │
//! │                   │             └── CoreError::EmptyCart ───────┤       │
//! │                   │                                             ▼       │
//! │                   └──────────────────────────────────────► ApiError    │
//! │                                                                         │
//! │  UnknownItem on remove/decrement never gets here: those commands       │
//! │  treat it as a no-op and answer with the current cart.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use sweetshop_core::{CoreError, ValidationError};
use thiserror::Error;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "EMPTY_CART",
///   "message": "Your cart is empty!"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
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
    /// Catalog card not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Malformed product passed to the cart
    InvalidProduct,

    /// Line item not in the cart
    UnknownItem,

    /// Checkout with an empty cart
    EmptyCart,

    /// Unrecognised shell input
    BadCommand,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a bad command error.
    pub fn bad_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadCommand, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts cart errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidProduct(_) => ErrorCode::InvalidProduct,
            CoreError::UnknownItem(_) => ErrorCode::UnknownItem,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts validation errors (e.g. search queries) to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures that stop the storefront from starting or running.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the config file, the catalog file or stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `ConfigState`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values are inconsistent.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Catalog file could not be loaded.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] ValidationError),
}
