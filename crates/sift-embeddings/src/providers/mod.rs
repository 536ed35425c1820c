//! Provider registry.
//!
//! - `api`: OpenAI-compatible embeddings endpoint (default)
//! - `hashing`: deterministic local vectors, no network

pub mod api_provider;
pub mod hashing_provider;

pub use api_provider::ApiProvider;
pub use hashing_provider::HashingProvider;

use sift_core::config::{api_key_from_env, EmbeddingConfig};
use sift_core::errors::{EmbeddingError, SiftError, SiftResult};
use sift_core::traits::IEmbeddingProvider;
use tracing::info;

use crate::cache::CachedProvider;

/// Build the configured provider, wrapped in the query cache when enabled.
pub fn create_provider(config: &EmbeddingConfig) -> SiftResult<Box<dyn IEmbeddingProvider>> {
    let provider: Box<dyn IEmbeddingProvider> = match config.provider.as_str() {
        "api" => {
            let api_key = api_key_from_env(&config.api_key_env).ok_or_else(|| {
                EmbeddingError::MissingApiKey {
                    env_var: config.api_key_env.clone(),
                }
            })?;
            Box::new(ApiProvider::from_config(config, api_key)?)
        }
        "hashing" => Box::new(HashingProvider::new(config.dimensions)),
        other => {
            return Err(SiftError::ConfigError {
                reason: format!("unknown embedding provider: {other}"),
            })
        }
    };

    info!(
        provider = provider.name(),
        dims = provider.dimensions(),
        cache = config.query_cache_size,
        "embedding provider ready"
    );

    if config.query_cache_size == 0 {
        return Ok(provider);
    }
    Ok(Box::new(CachedProvider::new(provider, config.query_cache_size)))
}
