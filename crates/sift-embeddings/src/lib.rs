//! # sift-embeddings
//!
//! Embedding collaborators for the retrieval pipeline. Documents are embedded
//! once at ingestion; questions are embedded per query, optionally through
//! [`CachedProvider`].

pub mod cache;
pub mod providers;

pub use cache::CachedProvider;
pub use providers::{create_provider, ApiProvider, HashingProvider};
