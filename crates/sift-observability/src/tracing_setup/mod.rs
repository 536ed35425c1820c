//! Tracing setup: env-filtered structured logging.

pub mod spans;

use sift_core::config::ObservabilityConfig;
use sift_core::errors::{SiftError, SiftResult};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `sift_retrieval=debug`.
pub const LOG_ENV_VAR: &str = "SIFT_LOG";

/// Build the filter: `SIFT_LOG` wins, then the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> SiftResult<()> {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| SiftError::ConfigError {
        reason: format!("tracing init failed: {e}"),
    })
}
