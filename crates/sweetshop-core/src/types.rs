//! # Domain Types
//!
//! Product identity and the cart line item.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   derive    ┌─────────────────┐                   │
//! │  │   ProductRef    │ ──────────► │   ProductId     │                   │
//! │  │  ─────────────  │             │  "Ladoo-0"      │                   │
//! │  │  title          │             └────────┬────────┘                   │
//! │  │  unit_price     │                      │ key                        │
//! │  │  image_ref      │             ┌────────▼────────┐                   │
//! │  │  index          │ ──────────► │    LineItem     │                   │
//! │  └─────────────────┘  first add  │  quantity >= 1  │                   │
//! │                                  └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_product_title, ValidationResult};

// =============================================================================
// Product Identity
// =============================================================================

/// Stable identity of a product in the cart.
///
/// ## Uniqueness Contract
/// `ProductId::derive(title, index)` yields `"{title.trim()}-{index}"`:
/// - Titles that differ only by surrounding whitespace map to the same id.
/// - Titles that differ in case or inner content map to different ids.
/// - Cards at different catalog positions never share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Derives the id for the card at `index` with the given title.
    ///
    /// ## Example
    /// ```rust
    /// use sweetshop_core::ProductId;
    ///
    /// assert_eq!(ProductId::derive("Ladoo", 0).as_str(), "Ladoo-0");
    /// assert_eq!(ProductId::derive("  Ladoo ", 0), ProductId::derive("Ladoo", 0));
    /// assert_ne!(ProductId::derive("ladoo", 0), ProductId::derive("Ladoo", 0));
    /// ```
    pub fn derive(title: &str, index: usize) -> Self {
        ProductId(format!("{}-{}", title.trim(), index))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ids coming back from a rendered row are taken verbatim.
impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

// =============================================================================
// Product Reference
// =============================================================================

/// What the catalog hands over for one "add to cart" interaction.
///
/// The price is raw catalog input and is validated when the item is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub title: String,
    pub unit_price: f64,
    pub image_ref: String,
    /// Position of the card in the catalog.
    pub index: usize,
}

impl ProductRef {
    pub fn new(
        title: impl Into<String>,
        unit_price: f64,
        image_ref: impl Into<String>,
        index: usize,
    ) -> Self {
        ProductRef {
            title: title.into(),
            unit_price,
            image_ref: image_ref.into(),
            index,
        }
    }

    /// Derives this product's cart identity.
    pub fn product_id(&self) -> ProductId {
        ProductId::derive(&self.title, self.index)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One aggregated cart entry.
///
/// ## Invariants
/// - `quantity >= 1` while stored in a registry
/// - `unit_price` is frozen at first add; later adds of the same product do
///   not re-read the catalog price
///
/// Serialize-only: a `LineItem` is built by `from_product`, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub image_ref: String,
    pub quantity: u32,
}

impl LineItem {
    /// Creates a quantity-1 line item, validating title and price.
    pub fn from_product(product: &ProductRef) -> ValidationResult<Self> {
        validate_product_title(&product.title)?;
        let unit_price = Money::try_new(product.unit_price)?;

        Ok(LineItem {
            id: product.product_id(),
            title: product.title.trim().to_string(),
            unit_price,
            image_ref: product.image_ref.clone(),
            quantity: 1,
        })
    }

    /// Full-precision `unit_price × quantity`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
