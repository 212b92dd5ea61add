//! Logging setup for the `chatstat` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the application.

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Maps a `-v` count to a filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level. Stdout is
/// left to the report. Calling this twice is a no-op.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let console_layer = fmt::layer()
        .with_target(verbosity > 1)
        .with_writer(std::io::stderr);

    // Fails only if a global subscriber is already installed.
    let _ = Registry::default()
        .with(env_filter)
        .with(console_layer)
        .try_init();

    tracing::debug!(verbosity, "logging initialized");
}
