//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing` so stdout carries only the
//! report lines.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// `RUST_LOG` wins when set. Otherwise `--debug` selects `debug`, and the
/// default is `warn`.
pub fn init_logging(debug_enabled: bool) {
    let default_level = if debug_enabled { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_enabled)
        .with_thread_ids(debug_enabled)
        .try_init();

    debug!("tempfan v{} logging initialized", env!("CARGO_PKG_VERSION"));
}
