//! # Cart Engine
//!
//! ```text
//! cart/
//! ├── registry.rs  ◄─── LineItemRegistry (ordered, quantity >= 1)
//! ├── ops.rs       ◄─── Cart: add / increment / decrement / remove / clear
//! ├── totals.rs    ◄─── summarize(): item count + total, from scratch
//! ├── render.rs    ◄─── project(): CartView snapshot
//! ├── checkout.rs  ◄─── Cart::checkout(), receipts, outcomes
//! └── store.rs     ◄─── CartStore: single owner, emits events
//! ```

pub mod checkout;
pub mod ops;
pub mod registry;
pub mod render;
pub mod store;
pub mod totals;

pub use checkout::{CheckoutOutcome, CheckoutReceipt};
pub use ops::{Cart, CartPhase};
pub use registry::{Decrement, LineItemRegistry};
pub use render::{CartView, DisplayRow};
pub use store::CartStore;
pub use totals::CartSummary;
