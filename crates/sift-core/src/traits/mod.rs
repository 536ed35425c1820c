//! Collaborator seams consumed by the retrieval pipeline.

mod document_store;
mod embedding;
mod generator;

pub use document_store::IDocumentStore;
pub use embedding::IEmbeddingProvider;
pub use generator::{GenerationRequest, IGenerator};
