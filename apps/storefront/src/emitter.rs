//! # Channel Emitter
//!
//! Forwards cart events from the store to the presenter task.
//!
//! ```text
//!   CartStore (under CartState lock)        Presenter task
//!   ────────────────────────────────        ──────────────
//!   emit_view ──────────┐
//!   emit_notification ──┼──► mpsc::unbounded ──► panel / banner / alert
//!   emit_checkout ──────┘
//! ```
//!
//! Sending never blocks, so the cart lock is never held across the
//! presenter's terminal writes.

use sweetshop_core::{CartEventEmitter, CartView, CheckoutOutcome};
use tokio::sync::mpsc;
use tracing::debug;

/// Events consumed by the presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Redraw the cart panel.
    View(CartView),
    /// Show the transient banner.
    Notification(String),
    /// Show a blocking alert.
    Checkout { success: bool, message: String },
}

impl From<&CheckoutOutcome> for UiEvent {
    fn from(outcome: &CheckoutOutcome) -> Self {
        UiEvent::Checkout {
            success: outcome.is_success(),
            message: outcome.message().to_string(),
        }
    }
}

/// Emitter backed by an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChannelEmitter {
    /// Creates an emitter and the receiver the presenter drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelEmitter { tx }, rx)
    }

    fn send(&self, event: UiEvent) {
        // Receiver gone means the presenter already shut down
        if let Err(e) = self.tx.send(event) {
            debug!(event = ?e.0, "Presenter closed, dropping event");
        }
    }
}

impl CartEventEmitter for ChannelEmitter {
    fn emit_view(&self, view: &CartView) {
        self.send(UiEvent::View(view.clone()));
    }

    fn emit_notification(&self, message: &str) {
        self.send(UiEvent::Notification(message.to_string()));
    }

    fn emit_checkout(&self, outcome: &CheckoutOutcome) {
        self.send(UiEvent::from(outcome));
    }
}
