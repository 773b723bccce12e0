//! Shared pieces of the `wavekeyd` and `wavekey-link` binaries.

pub mod config;

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber from a filter directive.
///
/// An unparsable directive falls back to `info` rather than failing the
/// process over a logging setting.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
