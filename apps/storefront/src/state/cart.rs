//! # Cart State
//!
//! Shares the single `CartStore` between the shell and any other caller.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so that, even with several
//! threads, cart mutations run one at a time and each one (mutation,
//! totals, render) completes before the next begins.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell Input              Command                  Store Call           │
//! │  ───────────              ───────                  ──────────           │
//! │  add 0 ─────────────────► add_to_cart() ─────────► add_item()           │
//! │  inc Ladoo-0 ───────────► increase_quantity() ───► increment()          │
//! │  dec Ladoo-0 ───────────► decrease_quantity() ───► decrement()          │
//! │  rm Ladoo-0 ────────────► remove_from_cart() ────► remove_item()        │
//! │  clear ─────────────────► clear_cart() ──────────► clear()              │
//! │  checkout ──────────────► checkout() ────────────► checkout()           │
//! │  cart ──────────────────► get_cart() ────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use sweetshop_core::{CartEventEmitter, CartStore};

/// Shared handle to the cart store.
#[derive(Debug, Clone)]
pub struct CartState {
    store: Arc<Mutex<CartStore>>,
}

impl CartState {
    /// Creates an empty cart reporting to `emitter`.
    pub fn new(emitter: Arc<dyn CartEventEmitter>) -> Self {
        CartState {
            store: Arc::new(Mutex::new(CartStore::new(emitter))),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = cart_state.with_store(|store| store.summary());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        // Store operations validate before writing, so a poisoned lock
        // still guards a consistent cart.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for CartState {
    fn default() -> Self {
        CartState {
            store: Arc::new(Mutex::new(CartStore::detached())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use sweetshop_core::ProductRef;

    #[test]
    fn test_clones_share_one_store() {
        let state = CartState::default();
        let other = state.clone();

        other
            .with_store_mut(|s| s.add_item(&ProductRef::new("Ladoo", 10.0, "", 0)))
            .unwrap();

        assert_eq!(state.with_store(|s| s.summary().item_count), 1);
    }

    #[test]
    fn test_concurrent_adds_are_serialised() {
        let state = CartState::default();
        let ladoo = ProductRef::new("Ladoo", 10.0, "", 0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                let ladoo = ladoo.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        state.with_store_mut(|s| s.add_item(&ladoo)).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let summary = state.with_store(|s| s.summary());
        assert_eq!(summary.item_count, 200);
        assert_eq!(summary.total_price.amount(), 2000.0);
    }
}
