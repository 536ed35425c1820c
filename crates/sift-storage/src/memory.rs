//! In-memory document store.

use std::sync::RwLock;

use sift_core::errors::{SiftResult, StorageError};
use sift_core::models::Document;
use sift_core::traits::IDocumentStore;

/// Vec-backed store. Readers get a cloned snapshot; writers append.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing documents.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }
}

impl IDocumentStore for MemoryDocumentStore {
    fn list_documents(&self) -> SiftResult<Vec<Document>> {
        let guard = self.documents.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn insert(&self, document: Document) -> SiftResult<()> {
        let mut guard = self
            .documents
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        guard.push(document);
        Ok(())
    }

    fn insert_all(&self, documents: Vec<Document>) -> SiftResult<()> {
        let mut guard = self
            .documents
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        guard.extend(documents);
        Ok(())
    }

    fn count(&self) -> SiftResult<usize> {
        let guard = self.documents.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.len())
    }
}
