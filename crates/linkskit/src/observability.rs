//! Tracing subscriber initialization.

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` (e.g. `"info"` or `"linkskit_social=debug"`)
/// when `RUST_LOG` is unset or invalid.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => {
            info!(default_filter, "Tracing initialized");
            true
        }
        Err(e) => {
            debug!(error = %e, "Tracing subscriber already installed");
            false
        }
    }
}
