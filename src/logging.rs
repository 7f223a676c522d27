//! Diagnostic logging setup
//!
//! Installs a `tracing` subscriber writing compact lines to stderr. `RUST_LOG`
//! overrides the default filter.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Default filter without `--verbose`
pub const DEFAULT_FILTER: &str = "playmoney=warn";

/// Default filter with `--verbose`
pub const VERBOSE_FILTER: &str = "playmoney=debug";

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    INIT_TRACING.call_once(|| {
        let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init();

        if installed.is_ok() {
            tracing::debug!(verbose, "tracing initialized");
        }
    });
}
