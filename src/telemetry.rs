//! Opt-in tracing setup for embedders, examples and tests.
//!
//! The core only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that want console output call [`init`] once at startup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a formatted stderr subscriber honoring `RUST_LOG`, defaulting
/// to `info` for this crate. Safe to call more than once; subsequent calls
/// are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,routegraph=info"))
        .expect("static filter directive parses");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    // try_init so tests and embedders with their own subscriber keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
