//! Structured logging setup

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_LOGGER: Once = Once::new();

/// Initialize logging once at startup.
///
/// Levels come from `RUST_LOG` (for example `RUST_LOG=devtoken_jwt=debug`),
/// defaulting to `warn`. Output goes to stderr so stdout carries only the token.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
