//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `CCG_LOG` for per-module log levels, e.g.
/// `CCG_LOG=ccg_analysis::scanner=debug,ccg_analysis::graph=info`.
/// Falls back to `ccg=info` if `CCG_LOG` is not set or is invalid.
///
/// Idempotent. Library code never calls this; binaries and test harnesses do.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // try_init: another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
