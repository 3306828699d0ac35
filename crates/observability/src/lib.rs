//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init();
}

/// Environment-driven logging configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
pub use crate::tracing::init_with;
