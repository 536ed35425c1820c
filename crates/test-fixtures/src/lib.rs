//! Test fixture loader for sift golden scenarios.
//!
//! Provides typed deserialization of fixture JSON files for tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixtures (this crate's directory).
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_golden_retrieval_files_exist() {
        let files = [
            "golden/retrieval/orthogonal_pair.json",
            "golden/retrieval/empty_corpus.json",
            "golden/retrieval/tied_scores.json",
            "golden/retrieval/mismatched_dimensions.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_files_parse_as_json() {
        let files = list_fixtures("golden/retrieval");
        assert_eq!(files.len(), 4);
        for file in &files {
            let content = std::fs::read_to_string(file).unwrap();
            let value: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert!(value["input"].is_object(), "{} has no input", file.display());
            assert!(value["expected"].is_object(), "{} has no expected", file.display());
        }
    }
}
