//! Document ingestion: validate, embed once, store.

use sift_core::config::StorageConfig;
use sift_core::errors::{Collaborator, EmbeddingError, SiftError, SiftResult};
use sift_core::models::{Document, NewDocument};
use sift_core::traits::{IDocumentStore, IEmbeddingProvider};
use sift_observability::ingest_span;
use tracing::info;

use crate::chunker::{chunk_name, split_into_chunks};

/// Chunking settings applied at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingPolicy {
    pub enabled: bool,
    pub size: usize,
    pub overlap: usize,
}

impl ChunkingPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            size: 0,
            overlap: 0,
        }
    }
}

impl From<&StorageConfig> for ChunkingPolicy {
    fn from(config: &StorageConfig) -> Self {
        Self {
            enabled: config.chunking,
            size: config.chunk_size,
            overlap: config.chunk_overlap,
        }
    }
}

/// Writes new documents into a store with their embeddings.
pub struct Ingestor<'a> {
    store: &'a dyn IDocumentStore,
    embedder: &'a dyn IEmbeddingProvider,
    chunking: ChunkingPolicy,
}

impl<'a> Ingestor<'a> {
    pub fn new(store: &'a dyn IDocumentStore, embedder: &'a dyn IEmbeddingProvider) -> Self {
        Self {
            store,
            embedder,
            chunking: ChunkingPolicy::disabled(),
        }
    }

    pub fn with_chunking(mut self, chunking: ChunkingPolicy) -> Self {
        self.chunking = chunking;
        self
    }

    /// Ingest one document. Returns the ids of every stored record, one per
    /// chunk, in order.
    ///
    /// Name and content must both be non-empty. Nothing is embedded or
    /// stored when validation fails, and chunks are stored all-or-nothing.
    pub fn ingest(&self, new: &NewDocument) -> SiftResult<Vec<String>> {
        if new.name.is_empty() || new.content.is_empty() {
            return Err(SiftError::invalid_input("name and content are required"));
        }
        let _span = ingest_span!(new.name).entered();

        let pieces: Vec<(String, String)> = if self.chunking.enabled {
            let chunks = split_into_chunks(&new.content, self.chunking.size, self.chunking.overlap);
            if chunks.len() == 1 {
                vec![(new.name.clone(), new.content.clone())]
            } else {
                chunks
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| (chunk_name(&new.name, i), c))
                    .collect()
            }
        } else {
            vec![(new.name.clone(), new.content.clone())]
        };

        let texts: Vec<String> = pieces.iter().map(|(_, c)| c.clone()).collect();
        let embeddings = self
            .embedder
            .embed_batch(&texts)
            .map_err(|e| SiftError::upstream(Collaborator::Embedding, e))?;

        if embeddings.len() != pieces.len() {
            return Err(SiftError::upstream(
                Collaborator::Embedding,
                EmbeddingError::MalformedResponse {
                    reason: format!(
                        "expected {} embeddings, got {}",
                        pieces.len(),
                        embeddings.len()
                    ),
                }
                .into(),
            ));
        }

        let documents: Vec<Document> = pieces
            .into_iter()
            .zip(embeddings)
            .map(|((name, content), embedding)| {
                Document::new(uuid::Uuid::new_v4().to_string(), name, content, embedding)
            })
            .collect();
        let ids: Vec<String> = documents.iter().map(|d| d.id.clone()).collect();

        self.store
            .insert_all(documents)
            .map_err(|e| SiftError::upstream(Collaborator::DocumentStore, e))?;

        info!(name = %new.name, records = ids.len(), "document ingested");
        Ok(ids)
    }
}
