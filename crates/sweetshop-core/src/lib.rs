//! # sweetshop-core: Pure Cart Logic for the Sweetshop Storefront
//!
//! This crate holds the cart state engine and the catalog filter as pure
//! functions and owned data, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sweetshop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (apps/storefront)                    │   │
//! │  │   event shell ──► commands ──► CartState (Arc<Mutex<..>>)       │   │
//! │  │   panel / banner / alert collaborators                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ sweetshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  filter   │  │   Money   │  │ CartStore │  │   rules   │  │   │
//! │  │   │  search   │  │           │  │ CartView  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Registry, operations, totals, render sync, checkout, store
//! - [`catalog`] - Product cards, category filter and title search
//! - [`events`] - Collaborator boundary (`CartEventEmitter`)
//! - [`money`] - Money type, two-decimal display rounding
//! - [`types`] - Product identity and line items
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use sweetshop_core::{CartStore, ProductRef};
//!
//! let mut store = CartStore::detached();
//! let ladoo = ProductRef::new("Ladoo", 10.0, "img/ladoo.png", 0);
//!
//! store.add_item(&ladoo).unwrap();
//! let summary = store.add_item(&ladoo).unwrap();
//!
//! assert_eq!(summary.item_count, 2);
//! assert_eq!(summary.formatted_total(), "$20.00");
//! assert_eq!(store.view().rows.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod events;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{
    Cart, CartPhase, CartStore, CartSummary, CartView, CheckoutOutcome, CheckoutReceipt,
    DisplayRow,
};
pub use catalog::{Catalog, CatalogCard, CatalogView, CategoryFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use events::{CartEventEmitter, NoOpEmitter};
pub use money::Money;
pub use types::{LineItem, ProductId, ProductRef};
