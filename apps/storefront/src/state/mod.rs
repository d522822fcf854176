//! # State Module
//!
//! Application state for the storefront, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │ CatalogState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<        │  │  store_name      │              │
//! │  │   CartStore  │  │   Catalog    │  │  dismiss_ms      │              │
//! │  │  >>          │  │  >           │  │  catalog_path    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Arc<Mutex<T>> serialises every cart mutation             │
//! │  • CatalogState, ConfigState: read-only after initialization           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::{default_catalog, CatalogState};
pub use config::ConfigState;
