use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::QueryMode;

/// Generation collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Chat completions endpoint URL.
    pub endpoint: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Model identifier per query mode.
    pub models: ModelTable,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            timeout_ms: defaults::DEFAULT_GENERATION_TIMEOUT_MS,
            models: ModelTable::default(),
        }
    }
}

/// One model identifier per [`QueryMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelTable {
    pub general: String,
    pub fast: String,
    pub deep: String,
}

impl ModelTable {
    /// Total lookup: an absent mode resolves like `General`.
    pub fn model_for(&self, mode: Option<QueryMode>) -> &str {
        match mode.unwrap_or_default() {
            QueryMode::General => &self.general,
            QueryMode::Fast => &self.fast,
            QueryMode::Deep => &self.deep,
        }
    }
}

impl Default for ModelTable {
    fn default() -> Self {
        Self {
            general: defaults::DEFAULT_GENERAL_MODEL.to_string(),
            fast: defaults::DEFAULT_FAST_MODEL.to_string(),
            deep: defaults::DEFAULT_DEEP_MODEL.to_string(),
        }
    }
}
