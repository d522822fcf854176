//! # Cart Operations
//!
//! The mutating API over the line item registry.
//!
//! ## Operation Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation      Present id              Absent id / bad input          │
//! │  ─────────────  ──────────────────────  ─────────────────────────────  │
//! │  add_item       quantity += 1           insert qty 1 / InvalidProduct  │
//! │  increment      quantity += 1           UnknownItem                    │
//! │  decrement      qty -= 1, delete at 1   UnknownItem                    │
//! │  remove_item    delete                  UnknownItem                    │
//! │  clear          delete everything       (never fails)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation returns the freshly recomputed [`CartSummary`]. A failed
//! operation leaves the cart exactly as it was.


use crate::cart::registry::LineItemRegistry;
use crate::cart::render::{project, CartView};
use crate::cart::totals::{summarize, CartSummary};
use crate::error::{CoreError, CoreResult};
use crate::types::{LineItem, ProductId, ProductRef};

/// Lifecycle state of the cart (not of the panel).
///
/// ```text
///            add_item
///   Empty ────────────► Populated ──┐ increment / decrement /
///     ▲                     │  ▲    │ remove (items remain)
///     │ clear / checkout /  │  └────┘
///     └─ last item removed ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
    Empty,
    Populated,
}

/// The shopping cart.
#[derive(Debug, Clone)]
pub struct Cart {
    registry: LineItemRegistry,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            registry: LineItemRegistry::new(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a catalog product.
    ///
    /// ## Errors
    /// `InvalidProduct` if the title is blank or the price is negative or
    /// not a finite number.
    pub fn add_item(&mut self, product: &ProductRef) -> CoreResult<CartSummary> {
        self.registry.insert_or_increment(product)?;
        Ok(self.summary())
    }

    /// Adds one unit to an item already in the cart.
    pub fn increment(&mut self, id: &ProductId) -> CoreResult<CartSummary> {
        self.registry
            .increment(id)
            .ok_or_else(|| CoreError::UnknownItem(id.clone()))?;
        Ok(self.summary())
    }

    /// Removes one unit; an item at quantity 1 is deleted.
    pub fn decrement(&mut self, id: &ProductId) -> CoreResult<CartSummary> {
        self.registry
            .decrement(id)
            .ok_or_else(|| CoreError::UnknownItem(id.clone()))?;
        Ok(self.summary())
    }

    /// Deletes an item regardless of quantity.
    pub fn remove_item(&mut self, id: &ProductId) -> CoreResult<CartSummary> {
        self.registry
            .remove(id)
            .ok_or_else(|| CoreError::UnknownItem(id.clone()))?;
        Ok(self.summary())
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> CartSummary {
        self.registry.clear();
        self.summary()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Totals derived from the current line items.
    pub fn summary(&self) -> CartSummary {
        summarize(&self.registry)
    }

    /// Display snapshot of the current line items.
    pub fn view(&self) -> CartView {
        project(&self.registry)
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.registry.get(id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> + '_ {
        self.registry.iter()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn phase(&self) -> CartPhase {
        if self.registry.is_empty() {
            CartPhase::Empty
        } else {
            CartPhase::Populated
        }
    }
}
