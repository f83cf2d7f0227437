//! Tracing/logging setup shared by embedding applications.
//!
//! The domain crates emit `tracing` events (store mutations, report period
//! selection); this crate wires up a subscriber for hosts that want to see
//! them. The library crates never install a subscriber on their own.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// JSON lines to stderr, filtered via `RUST_LOG` (default `info`). Safe to
/// call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
