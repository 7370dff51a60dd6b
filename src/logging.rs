//! Diagnostic logging.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging to stderr, filtered by `RUST_LOG`. Falls back to `default_filter` when
/// the variable is unset or invalid.
pub fn init(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
