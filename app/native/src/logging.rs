//! Logging initialization using the `tracing` crate.
//!
//! Diagnostics go to stderr so they never mix with the run messages printed
//! on stdout. The level is controlled with `RUST_LOG`, for example
//! `RUST_LOG=deskpaper=debug`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive when `RUST_LOG` is not set.
#[must_use]
pub fn default_directive() -> String {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    format!("warn,deskpaper={default_level}")
}

/// Initializes the global tracing subscriber.
///
/// Call once at startup, before anything logs. Calling it again is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    if tracing_subscriber::registry().with(filter).with(subscriber).try_init().is_err() {
        tracing::debug!("logging: subscriber already installed");
    }
}
