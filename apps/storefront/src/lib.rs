//! # Sweetshop Storefront Library
//!
//! Wires the cart engine to a terminal: configuration, the catalog, the
//! shared cart, the presenter task and the input loop.
//!
//! ## Module Organization
//! ```text
//! sweetshop_storefront/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart store
//! │   ├── catalog.rs  ◄─── Read-only product catalog
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Filter/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation & checkout
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── emitter.rs      ◄─── CartEventEmitter over an mpsc channel
//! ├── presenter.rs    ◄─── Panel, banner & alert rendering
//! ├── shell.rs        ◄─── Input line parsing & dispatch
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod emitter;
pub mod error;
pub mod presenter;
pub mod shell;
pub mod state;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use emitter::ChannelEmitter;
use error::AppError;
use presenter::Presenter;
use shell::{Shell, ShellReply};
use state::{CartState, CatalogState, ConfigState};

/// Runs the storefront until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,sweetshop=debug, override with RUST_LOG             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_CONFIG or the platform config dir                      │
/// │     • Falls back to defaults on any error                               │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • JSON file from catalog_path, else the built-in sweets             │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ChannelEmitter + Presenter task (stdout)                          │
/// │     • CartState: empty cart reporting to the emitter                    │
/// │                                                                         │
/// │  5. Input Loop ───────────────────────────────────────────────────────► │
/// │     • One stdin line = one command                                      │
/// │     • On exit the shell is dropped, the presenter drains and stops      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting Sweetshop storefront");

    let config_path = std::env::var_os("STOREFRONT_CONFIG").map(PathBuf::from);
    let config = ConfigState::load_or_default(config_path);
    let catalog = CatalogState::load(&config)?;
    info!(
        store = %config.store_name,
        cards = catalog.catalog().len(),
        "Catalog ready"
    );

    let (emitter, events) = ChannelEmitter::new();
    let cart = CartState::new(Arc::new(emitter));
    let presenter = tokio::spawn(
        Presenter::new(std::io::stdout(), config.notification_dismiss()).run(events),
    );

    let mut shell = Shell::new(cart, catalog, config);
    println!("{}", shell.banner());

    read_commands(&mut shell, BufReader::new(tokio::io::stdin()), io::stdout()).await?;

    // Last emitter handle lives in the shell's cart
    drop(shell);
    if let Err(e) = presenter.await {
        tracing::error!(?e, "Presenter task failed");
    }

    info!("Storefront closed");
    Ok(())
}

/// Feeds `input` to the shell one line at a time until `quit` or EOF.
///
/// A line that is not valid UTF-8 is logged and skipped.
async fn read_commands<R, W>(shell: &mut Shell, input: R, mut out: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(%e, "Skipping unreadable input line");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match shell.execute(&line) {
            ShellReply::Text(text) => {
                writeln!(out, "{}", text)?;
                out.flush()?;
            }
            ShellReply::Silent => {}
            ShellReply::Quit => break,
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sweetshop=trace` - Show trace for sweetshop crates only
/// - Default: info, debug for sweetshop crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sweetshop=debug"));

    log_subscriber(filter).init();
}

/// Formatting subscriber writing to stderr; `filter` alone decides what
/// gets through.
fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn shell() -> Shell {
        Shell::new(
            CartState::default(),
            CatalogState::default(),
            ConfigState::default(),
        )
    }

    #[test]
    fn test_env_filter_controls_levels() {
        tracing::subscriber::with_default(log_subscriber(EnvFilter::new("warn")), || {
            assert!(!tracing::enabled!(Level::DEBUG));
            assert!(!tracing::enabled!(Level::INFO));
            assert!(tracing::enabled!(Level::WARN));
        });
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_skipped() {
        let mut shell = shell();
        let input: &[u8] = b"add 0\n\xff\xfe oops\ncart\nquit\ncart\n";
        let mut out = Vec::new();

        read_commands(&mut shell, input, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"itemCount\": 1"));
        // Nothing after quit is read
        assert_eq!(text.matches("\"view\"").count(), 1);
    }

    #[tokio::test]
    async fn test_eof_ends_the_loop() {
        let mut shell = shell();
        let mut out = Vec::new();

        read_commands(&mut shell, &b"help"[..], &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("checkout"));
    }
}
