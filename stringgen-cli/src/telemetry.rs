//! Diagnostic logging for the CLI.
//!
//! Events go to stderr so stdout carries only the result line Xcode shows in
//! the build log.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity-derived default.
pub fn initialise(verbose: bool) -> Result<(), TelemetryError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)
            .map_err(|error| TelemetryError::Filter(error.to_string()))?,
        _ => EnvFilter::new(default_level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init()
        .map_err(|error| TelemetryError::Subscriber(error.to_string()))
}
