use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "api" or "hashing".
    pub provider: String,
    /// Model identifier sent to the embeddings API.
    pub model: String,
    /// Embeddings endpoint URL.
    pub endpoint: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Query embedding cache max entries. 0 disables the cache.
    pub query_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
