//! Logging setup for binaries and bindings.
//!
//! Installs a global `tracing` subscriber that writes to stderr. The level is
//! derived from a verbosity count and can be overridden with `PLANTID_LOG`,
//! which accepts any `EnvFilter` directive.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "PLANTID_LOG";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Maps a `-v` count to a default level directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes logging. Subsequent calls are no-ops.
pub fn init(verbosity: u8) -> Result<(), LoggingError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()?;
    let _ = INITIALIZED.set(());

    tracing::debug!("Logging initialized");
    Ok(())
}
