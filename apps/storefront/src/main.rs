//! # Sweetshop Storefront Entry Point
//!
//! Terminal storefront: browse the catalog, fill the cart, check out.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sweetshop Storefront                             │
//! │                                                                         │
//! │  stdin ──► Shell ──► commands/ ──► CartState ──► CartStore             │
//! │                                                     │                   │
//! │                                       ChannelEmitter│                   │
//! │                                                     ▼                   │
//! │  stdout ◄───────────────────────────────────── Presenter task          │
//! │  stderr ◄── tracing                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match sweetshop_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
