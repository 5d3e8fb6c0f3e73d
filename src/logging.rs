//! Diagnostics for the command line tools.
//!
//! Everything goes to stderr, so stdout and report files only ever contain
//! tool output.

use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing.
///
/// Respects `RUST_LOG`, otherwise uses `default_filter`.
pub fn init(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}
