//! Configuration for all subsystems, loadable from TOML.

pub mod defaults;
mod embedding_config;
mod generation_config;
mod observability_config;
mod retrieval_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use generation_config::{GenerationConfig, ModelTable};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use storage_config::StorageConfig;

use crate::errors::{SiftError, SiftResult};

/// Root configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub retrieval: RetrievalConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl SiftConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(input: &str) -> SiftResult<Self> {
        toml::from_str(input).map_err(|e| SiftError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> SiftResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SiftError::ConfigError {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&raw)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> SiftResult<String> {
        toml::to_string(self).map_err(|e| SiftError::ConfigError {
            reason: e.to_string(),
        })
    }
}

/// Read an API key from the named environment variable.
///
/// Returns `None` when the variable is unset or blank.
pub fn api_key_from_env(env_var: &str) -> Option<String> {
    std::env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
