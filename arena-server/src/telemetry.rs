//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured level when set.

use arena_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the log filter for `config`.
///
/// # Errors
/// Returns an error if neither `RUST_LOG` nor `config.level` is a valid
/// filter directive.
pub fn filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.level)?),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Fails on an invalid filter or if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_target(false);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
