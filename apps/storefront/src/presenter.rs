//! # Presenter
//!
//! Owns the three user-facing collaborators: the cart panel, the
//! transient "added to cart" banner and the checkout alert.
//!
//! ## Banner Timing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t=0     Notification("Ladoo added")  ──► show, generation = 1         │
//! │  t=1000  Notification("Jalebi added") ──► show, generation = 2         │
//! │  t=1500  dismiss(1)                   ──► stale, banner stays          │
//! │  t=2500  dismiss(2)                   ──► current, banner hidden       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each banner gets its own timer, and only the timer of the newest banner
//! may hide it.

use std::io::{self, Write};
use std::time::Duration;

use sweetshop_core::CartView;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::emitter::UiEvent;

/// Text shown in the panel when the cart has no items.
pub const EMPTY_PANEL_MESSAGE: &str = "Your cart is empty.";

/// Renders cart events to a writer.
#[derive(Debug)]
pub struct Presenter<W> {
    out: W,
    dismiss_after: Duration,
    banner: Option<String>,
    generation: u64,
}

impl<W: Write + Send> Presenter<W> {
    pub fn new(out: W, dismiss_after: Duration) -> Self {
        Presenter {
            out,
            dismiss_after,
            banner: None,
            generation: 0,
        }
    }

    /// Banner currently on screen.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Drains `events` until every sender is dropped, then hands the
    /// presenter back.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        let (dismiss_tx, mut dismiss_rx) = mpsc::unbounded_channel::<u64>();

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event, &dismiss_tx),
                    None => break,
                },
                Some(generation) = dismiss_rx.recv() => self.dismiss(generation),
            }
        }

        debug!("Presenter stopped");
        self
    }

    fn handle(&mut self, event: UiEvent, dismiss_tx: &mpsc::UnboundedSender<u64>) {
        let result = match event {
            UiEvent::View(view) => self.render_panel(&view),
            UiEvent::Notification(message) => {
                self.generation += 1;
                self.schedule_dismiss(self.generation, dismiss_tx.clone());
                let result = writeln!(self.out, "[notice] {}", message);
                self.banner = Some(message);
                result
            }
            UiEvent::Checkout { success, message } => {
                let tag = if success { "ok" } else { "alert" };
                writeln!(self.out, "[{}] {}", tag, message)
            }
        };

        if let Err(e) = result.and_then(|_| self.out.flush()) {
            warn!(?e, "Failed to write to terminal");
        }
    }

    fn schedule_dismiss(&self, generation: u64, dismiss_tx: mpsc::UnboundedSender<u64>) {
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Presenter may have stopped in the meantime
            let _ = dismiss_tx.send(generation);
        });
    }

    fn dismiss(&mut self, generation: u64) {
        if generation == self.generation {
            if let Some(message) = self.banner.take() {
                debug!(%message, "Banner dismissed");
            }
        }
    }

    fn render_panel(&mut self, view: &CartView) -> io::Result<()> {
        writeln!(self.out, "── Cart ─────────────────────────────")?;

        if view.is_empty {
            return writeln!(self.out, "  {}", EMPTY_PANEL_MESSAGE);
        }

        for row in &view.rows {
            writeln!(
                self.out,
                "  {:<24} x{:<3} {:>10}   [{}]",
                row.title, row.quantity, row.formatted_line_total, row.id
            )?;
        }

        writeln!(
            self.out,
            "  Total: {} ({} items)",
            view.formatted_total, view.item_count
        )
    }
}
