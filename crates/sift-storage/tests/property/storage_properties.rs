//! Property tests: chunk coverage, insertion order.

use proptest::prelude::*;

use sift_core::models::Document;
use sift_core::traits::IDocumentStore;
use sift_storage::chunker::split_into_chunks;
use sift_storage::SqliteDocumentStore;

proptest! {
    #[test]
    fn prop_chunks_cover_text(
        text in "[a-z ]{1,300}",
        size in 1usize..50,
        overlap in 0usize..60,
    ) {
        let chunks = split_into_chunks(&text, size, overlap);
        let overlap = overlap.min(size - 1);

        prop_assert!(!chunks.is_empty());
        prop_assert!(chunks.iter().all(|c| c.chars().count() <= size));

        // Dropping each chunk's overlap prefix rebuilds the text.
        let mut rebuilt: String = chunks[0].clone();
        for c in &chunks[1..] {
            rebuilt.extend(c.chars().skip(overlap));
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_sqlite_snapshot_keeps_insertion_order(n in 1usize..30) {
        let store = SqliteDocumentStore::open_in_memory().unwrap();
        for i in 0..n {
            store
                .insert(Document::new(format!("id-{i}"), format!("doc {i}"), "x", vec![i as f32]))
                .unwrap();
        }
        let docs = store.list_documents().unwrap();
        prop_assert_eq!(docs.len(), n);
        for (i, d) in docs.iter().enumerate() {
            prop_assert_eq!(&d.id, &format!("id-{i}"));
            prop_assert_eq!(&d.embedding, &vec![i as f32]);
        }
    }
}
