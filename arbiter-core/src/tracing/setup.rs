//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Arbiter tracing/logging system.
///
/// Reads the `ARBITER_LOG` environment variable for per-subsystem log
/// levels. Format: `ARBITER_LOG=weights=debug,knowledge=info,recommend=warn`
///
/// Falls back to `arbiter=info` if `ARBITER_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ARBITER_LOG")
            .unwrap_or_else(|_| EnvFilter::new("arbiter=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();

        ::tracing::debug!("arbiter tracing initialized");
    });
}
