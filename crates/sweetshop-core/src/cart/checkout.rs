//! # Checkout Gate
//!
//! Refuses an empty cart; otherwise snapshots the order and empties the cart
//! in the same call. There is no partial checkout.
//!
//! ```text
//!   checkout()
//!       │
//!       ├── item_count == 0 ──► Err(EmptyCart)       (cart untouched)
//!       │
//!       └── otherwise ────────► receipt snapshot ──► clear() ──► Ok(receipt)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::ops::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Message shown when checkout is refused.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";

/// Message shown when checkout completes.
pub const CHECKOUT_SUCCESS_MESSAGE: &str = "Checkout successful!";

/// Frozen snapshot of a completed checkout, taken before the cart is
/// cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutReceipt {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Distinct line items checked out.
    pub line_count: usize,
    #[ts(type = "number")]
    pub item_count: u64,
    pub total_price: Money,
    pub formatted_total: String,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

/// Terminal outcome reported to the user-facing alert.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    EmptyCart,
    Success(CheckoutReceipt),
}

impl CheckoutOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CheckoutOutcome::EmptyCart => EMPTY_CART_MESSAGE,
            CheckoutOutcome::Success(_) => CHECKOUT_SUCCESS_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutOutcome::Success(_))
    }
}

impl Cart {
    /// Finalizes the cart.
    ///
    /// ## Errors
    /// `EmptyCart` when there is nothing to check out; the cart is left
    /// as it was.
    pub fn checkout(&mut self) -> CoreResult<CheckoutReceipt> {
        let summary = self.summary();
        if summary.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let receipt = CheckoutReceipt {
            id: Uuid::new_v4().to_string(),
            line_count: self.line_count(),
            item_count: summary.item_count,
            total_price: summary.total_price,
            formatted_total: summary.formatted_total(),
            completed_at: Utc::now(),
        };

        self.clear();
        Ok(receipt)
    }
}
