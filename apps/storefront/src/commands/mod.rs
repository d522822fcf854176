//! # Storefront Commands
//!
//! Every user interaction maps to exactly one command here.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Category filter, title search
//! ├── cart.rs     ◄─── Cart manipulation, checkout
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_catalog(catalog: &CatalogState, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, index: usize)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
