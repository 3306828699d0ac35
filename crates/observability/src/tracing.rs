//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process from the environment.
///
/// An invalid environment falls back to the default configuration.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let mut warning = None;
    let config = ObservabilityConfig::from_env().unwrap_or_else(|e| {
        warning = Some(e);
        ObservabilityConfig::default()
    });

    if let Err(e) = init_with(&config) {
        warning = Some(e);
        let _ = init_with(&ObservabilityConfig {
            filter: ObservabilityConfig::default().filter,
            ..config
        });
    }

    if let Some(e) = warning {
        ::tracing::warn!("{e}; using default logging configuration");
    }
}

/// Install the global subscriber for `config`.
///
/// Returns `Ok(())` without installing anything if a global subscriber is
/// already set.
pub fn init_with(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ConfigError::InvalidFilter(format!("{}: {e}", config.filter)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // Already-initialized is not an error.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    Ok(())
}
