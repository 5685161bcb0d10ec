//! Logging setup shared by the binaries.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Error raised when the global subscriber cannot be installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(#[from] TryInitError);

/// Installs a formatted subscriber that writes to standard error.
///
/// `RUST_LOG` overrides `default_directive` when set and valid.
///
/// # Errors
///
/// Returns [`TelemetryError`] if a global subscriber is already installed.
pub fn init(default_directive: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
