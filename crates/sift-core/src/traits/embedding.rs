use std::time::Duration;

use crate::errors::SiftResult;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>>;

    /// Embed a single text within `timeout`. Providers that do I/O override
    /// this to bound the call; local providers answer immediately.
    fn embed_with_timeout(&self, text: &str, timeout: Option<Duration>) -> SiftResult<Vec<f32>> {
        let _ = timeout;
        self.embed(text)
    }

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool {
        true
    }
}
