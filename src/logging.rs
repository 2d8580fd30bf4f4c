//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; wiring a subscriber is the
//! embedding application's choice. [`init`] is a convenience for binaries and
//! examples that just want `RUST_LOG`-controlled stdout logging.

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
