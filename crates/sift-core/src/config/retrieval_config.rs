use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of documents selected per question.
    pub top_k: usize,
    /// Delimiter placed between document blocks in the grounded context.
    pub context_separator: String,
    /// Maximum entries kept in the query log.
    pub query_log_capacity: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            context_separator: defaults::DEFAULT_CONTEXT_SEPARATOR.to_string(),
            query_log_capacity: defaults::DEFAULT_QUERY_LOG_CAPACITY,
        }
    }
}
