//! # Line Item Registry
//!
//! The authoritative, insertion-ordered collection of cart line items.
//!
//! ## Invariants
//! - Keys are unique: one entry per `ProductId`
//! - Every stored quantity is >= 1; decrementing the last unit deletes
//! - Iteration order is insertion order (first-added product first), and
//!   removal keeps the relative order of the remaining entries
//!
//! No method hands out `&mut LineItem`, so the invariants cannot be broken
//! from outside this module.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::types::{LineItem, ProductId, ProductRef};
use crate::validation::{validate_product_title, validate_unit_price, ValidationResult};

/// Result of decrementing a line item.
#[derive(Debug, Clone, PartialEq)]
pub enum Decrement {
    /// Quantity went down and the item is still in the registry.
    Reduced(u32),
    /// The item was at quantity 1 and has been deleted.
    Removed(LineItem),
}

/// Insertion-ordered mapping `ProductId → LineItem`.
#[derive(Debug, Clone, Default)]
pub struct LineItemRegistry {
    items: IndexMap<ProductId, LineItem>,
}

impl LineItemRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains_key(id)
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already present: quantity += 1, stored price untouched
    /// - Product not present: appended with quantity 1
    ///
    /// The product is validated first in both cases, so a malformed product
    /// never changes the registry.
    pub fn insert_or_increment(&mut self, product: &ProductRef) -> ValidationResult<&LineItem> {
        validate_product_title(&product.title)?;
        validate_unit_price(product.unit_price)?;

        match self.items.entry(product.product_id()) {
            Entry::Occupied(entry) => {
                let item = entry.into_mut();
                item.quantity = item.quantity.saturating_add(1);
                Ok(&*item)
            }
            Entry::Vacant(entry) => {
                let item = LineItem::from_product(product)?;
                Ok(&*entry.insert(item))
            }
        }
    }

    /// Adds one unit to an existing item. Returns the new quantity, or
    /// `None` if the id is absent.
    pub fn increment(&mut self, id: &ProductId) -> Option<u32> {
        let item = self.items.get_mut(id)?;
        item.quantity = item.quantity.saturating_add(1);
        Some(item.quantity)
    }

    /// Removes one unit from an existing item, deleting it at quantity 1.
    /// Returns `None` if the id is absent.
    pub fn decrement(&mut self, id: &ProductId) -> Option<Decrement> {
        let item = self.items.get_mut(id)?;
        if item.quantity > 1 {
            item.quantity -= 1;
            return Some(Decrement::Reduced(item.quantity));
        }

        self.items.shift_remove(id).map(Decrement::Removed)
    }

    /// Deletes an item regardless of its quantity.
    pub fn remove(&mut self, id: &ProductId) -> Option<LineItem> {
        self.items.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> + '_ {
        self.items.values()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
