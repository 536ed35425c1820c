//! # sift-storage
//!
//! Document store collaborators and ingestion. Ingestion is the only place
//! documents are embedded; queries read stored vectors.

pub mod chunker;
pub mod ingest;
pub mod memory;
pub mod sqlite;

use std::path::Path;

use sift_core::config::StorageConfig;
use sift_core::errors::{SiftError, SiftResult, StorageError};
use sift_core::traits::IDocumentStore;

pub use ingest::{ChunkingPolicy, Ingestor};
pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;

/// Open the configured store backend.
pub fn open_store(config: &StorageConfig) -> SiftResult<Box<dyn IDocumentStore>> {
    match config.backend.as_str() {
        "memory" => Ok(Box::new(MemoryDocumentStore::new())),
        "sqlite" => Ok(Box::new(SqliteDocumentStore::open(Path::new(&config.db_path))?)),
        other => Err(SiftError::ConfigError {
            reason: format!("unknown storage backend: {other}"),
        }),
    }
}

pub(crate) fn to_storage_err(message: impl Into<String>) -> SiftError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
