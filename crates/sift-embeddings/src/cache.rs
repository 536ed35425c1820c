//! Query embedding cache using moka.
//!
//! Repeated questions skip the embedding call. Keys are blake3 hashes of the
//! exact text; values are the provider's vectors.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;
use sift_core::errors::SiftResult;
use sift_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Wraps any provider with a bounded in-memory cache.
pub struct CachedProvider {
    inner: Box<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedProvider {
    pub fn new(inner: Box<dyn IEmbeddingProvider>, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
            .time_to_live(Duration::from_secs(86400)) // 24 hour max TTL
            .build();

        Self {
            inner,
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl IEmbeddingProvider for CachedProvider {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        self.embed_with_timeout(text, None)
    }

    fn embed_with_timeout(&self, text: &str, timeout: Option<Duration>) -> SiftResult<Vec<f32>> {
        let key = Self::key(text);
        if let Some(vec) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(hash = %key, "embedding cache hit");
            return Ok(vec);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let vec = self.inner.embed_with_timeout(text, timeout)?;
        self.cache.insert(key, vec.clone());
        Ok(vec)
    }

    // Batches are ingestion traffic; they bypass the query cache.
    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        self.inner.embed_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Mutex};

    use sift_core::errors::{EmbeddingError, SiftError};

    use super::*;
    use crate::providers::HashingProvider;

    struct Counting {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl IEmbeddingProvider for Counting {
        fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SiftError::from(EmbeddingError::RequestFailed {
                    reason: "down".into(),
                }));
            }
            Ok(vec![text.len() as f32, 1.0])
        }

        fn dimensions(&self) -> usize {
            2
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    /// Records the budget of every call that reaches it.
    struct BudgetSeen {
        seen: Arc<Mutex<Vec<Option<Duration>>>>,
    }

    impl IEmbeddingProvider for BudgetSeen {
        fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
            self.embed_with_timeout(text, None)
        }

        fn embed_with_timeout(&self, _text: &str, timeout: Option<Duration>) -> SiftResult<Vec<f32>> {
            self.seen.lock().unwrap().push(timeout);
            Ok(vec![1.0])
        }

        fn dimensions(&self) -> usize {
            1
        }

        fn name(&self) -> &str {
            "budget"
        }
    }

    #[test]
    fn repeated_text_hits_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedProvider::new(
            Box::new(Counting {
                calls: calls.clone(),
                fail: false,
            }),
            100,
        );
        let a = cached.embed("what is the return policy").unwrap();
        let b = cached.embed("what is the return policy").unwrap();
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.hits(), 1);
        assert_eq!(cached.misses(), 1);
    }

    #[test]
    fn miss_forwards_the_budget() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let cached = CachedProvider::new(
            Box::new(BudgetSeen {
                seen: Arc::clone(&seen),
            }),
            10,
        );

        let budget = Some(Duration::from_millis(250));
        cached.embed_with_timeout("q", budget).unwrap();
        cached.embed_with_timeout("q", budget).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![budget]);
    }

    #[test]
    fn failures_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedProvider::new(
            Box::new(Counting {
                calls: calls.clone(),
                fail: true,
            }),
            100,
        );
        assert!(cached.embed("q").is_err());
        assert!(cached.embed("q").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clear_forces_reembedding() {
        let cached = CachedProvider::new(Box::new(HashingProvider::new(32)), 100);
        cached.embed("a question").unwrap();
        cached.clear();
        cached.embed("a question").unwrap();
        assert_eq!(cached.misses(), 2);
    }

    #[test]
    fn delegates_metadata() {
        let cached = CachedProvider::new(Box::new(HashingProvider::new(48)), 10);
        assert_eq!(cached.dimensions(), 48);
        assert_eq!(cached.name(), "hashing");
        assert!(cached.is_available());
    }
}
