//! # Cart Events
//!
//! Boundary between the cart and the collaborators that display it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore ──emit_view()─────────► panel display (re-render)           │
//! │            ──emit_notification()─► banner (owns auto-dismiss timing)   │
//! │            ──emit_checkout()─────► alert (EmptyCart / Success)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Emission is fire-and-forget: implementations must return promptly and
//! must never call back into the store.

use crate::cart::checkout::CheckoutOutcome;
use crate::cart::render::CartView;

/// Trait for emitting cart events (implemented by the storefront app).
pub trait CartEventEmitter: Send + Sync {
    /// A fresh view after a successful mutation.
    fn emit_view(&self, view: &CartView);

    /// Short-lived confirmation message, e.g. "Ladoo added to cart".
    fn emit_notification(&self, message: &str);

    /// Terminal checkout outcome.
    fn emit_checkout(&self, outcome: &CheckoutOutcome);
}

/// No-op event emitter for headless use and testing.
pub struct NoOpEmitter;

impl CartEventEmitter for NoOpEmitter {
    fn emit_view(&self, _view: &CartView) {}
    fn emit_notification(&self, _message: &str) {}
    fn emit_checkout(&self, _outcome: &CheckoutOutcome) {}
}
