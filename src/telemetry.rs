//! Tracing subscriber setup for binaries and tools embedding the crate.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a human-readable subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when it is set.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter(log_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Installs a JSON subscriber for deployed environments.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing_json(log_level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter(log_level))
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}

fn filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}
