//! Property tests: hashing provider shape, determinism, normalization.

use proptest::prelude::*;

use sift_core::traits::IEmbeddingProvider;
use sift_embeddings::{CachedProvider, HashingProvider};

proptest! {
    #[test]
    fn prop_fixed_dimensions(text in ".{0,200}", dims in 1usize..256) {
        let p = HashingProvider::new(dims);
        prop_assert_eq!(p.embed(&text).unwrap().len(), dims);
    }

    #[test]
    fn prop_unit_norm_or_zero(text in "[a-z ]{0,200}") {
        let v = HashingProvider::new(64).embed(&text).unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4, "norm = {}", norm);
    }

    #[test]
    fn prop_cache_is_transparent(text in "[a-zA-Z ]{1,100}") {
        let direct = HashingProvider::new(32).embed(&text).unwrap();
        let cached = CachedProvider::new(Box::new(HashingProvider::new(32)), 16);
        prop_assert_eq!(&cached.embed(&text).unwrap(), &direct);
        prop_assert_eq!(&cached.embed(&text).unwrap(), &direct);
        prop_assert_eq!(cached.hits(), 1);
    }
}
