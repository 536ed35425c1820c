use serde::{Deserialize, Serialize};

use super::defaults;

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store backend: "memory" or "sqlite".
    pub backend: String,
    /// SQLite database path (sqlite backend only).
    pub db_path: String,
    /// Split long documents into overlapping chunks at ingestion.
    pub chunking: bool,
    /// Chunk size in characters.
    pub chunk_size: usize,
    /// Characters shared by consecutive chunks.
    pub chunk_overlap: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_STORAGE_BACKEND.to_string(),
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
            chunking: defaults::DEFAULT_CHUNKING_ENABLED,
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            chunk_overlap: defaults::DEFAULT_CHUNK_OVERLAP,
        }
    }
}
