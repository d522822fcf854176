//! # Cart Store
//!
//! Single owner of the cart. Every handler goes through one `CartStore`
//! instead of touching shared state.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI event ──► CartStore::op()                                          │
//! │                   │                                                     │
//! │                   ├─ Cart::op()          (registry mutation)           │
//! │                   │     └─ Err ─────────► return, nothing emitted      │
//! │                   ├─ summarize()         (totals, from scratch)        │
//! │                   ├─ project() ─────────► emit_view(view)              │
//! │                   └─ add only ──────────► emit_notification(msg)       │
//! │                                                                         │
//! │  Everything runs to completion before the call returns.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use crate::cart::checkout::{CheckoutOutcome, CheckoutReceipt};
use crate::cart::ops::Cart;
use crate::cart::render::CartView;
use crate::cart::totals::CartSummary;
use crate::error::{CoreError, CoreResult};
use crate::events::{CartEventEmitter, NoOpEmitter};
use crate::types::{ProductId, ProductRef};

/// The cart plus the collaborators it reports to.
pub struct CartStore {
    cart: Cart,
    emitter: Arc<dyn CartEventEmitter>,
}

impl CartStore {
    /// Creates an empty store that reports to `emitter`.
    pub fn new(emitter: Arc<dyn CartEventEmitter>) -> Self {
        CartStore {
            cart: Cart::new(),
            emitter,
        }
    }

    /// Creates an empty store with no collaborators attached.
    pub fn detached() -> Self {
        Self::new(Arc::new(NoOpEmitter))
    }

    /// Adds one unit of `product`, re-renders, then confirms with
    /// `"{title} added to cart"`.
    pub fn add_item(&mut self, product: &ProductRef) -> CoreResult<CartSummary> {
        let summary = self.cart.add_item(product)?;
        self.sync();

        let message = format!("{} added to cart", product.title.trim());
        self.emitter.emit_notification(&message);
        Ok(summary)
    }

    pub fn increment(&mut self, id: &ProductId) -> CoreResult<CartSummary> {
        let summary = self.cart.increment(id)?;
        self.sync();
        Ok(summary)
    }

    pub fn decrement(&mut self, id: &ProductId) -> CoreResult<CartSummary> {
        let summary = self.cart.decrement(id)?;
        self.sync();
        Ok(summary)
    }

    pub fn remove_item(&mut self, id: &ProductId) -> CoreResult<CartSummary> {
        let summary = self.cart.remove_item(id)?;
        self.sync();
        Ok(summary)
    }

    pub fn clear(&mut self) -> CartSummary {
        let summary = self.cart.clear();
        self.sync();
        summary
    }

    /// Checks out the cart.
    ///
    /// The outcome is always reported to the alert collaborator. On success
    /// the cart is emptied and the empty view is emitted after the alert.
    pub fn checkout(&mut self) -> CoreResult<CheckoutReceipt> {
        match self.cart.checkout() {
            Ok(receipt) => {
                self.emitter
                    .emit_checkout(&CheckoutOutcome::Success(receipt.clone()));
                self.sync();
                Ok(receipt)
            }
            Err(err) => {
                if matches!(err, CoreError::EmptyCart) {
                    self.emitter.emit_checkout(&CheckoutOutcome::EmptyCart);
                }
                Err(err)
            }
        }
    }

    /// Read-only access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    pub fn view(&self) -> CartView {
        self.cart.view()
    }

    /// Re-emits the current view without changing anything, e.g. when the
    /// panel is opened.
    pub fn refresh(&self) -> CartView {
        self.sync()
    }

    fn sync(&self) -> CartView {
        let view = self.cart.view();
        self.emitter.emit_view(&view);
        view
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
