//! Generator factory tests.

use sift_core::config::GenerationConfig;
use sift_core::errors::{GenerationError, SiftError};
use sift_generation::create_generator;

#[test]
fn missing_key_is_reported_with_env_var() {
    let config = GenerationConfig {
        api_key_env: "SIFT_TEST_UNSET_GENERATION_KEY".into(),
        ..GenerationConfig::default()
    };
    match create_generator(&config) {
        Err(SiftError::GenerationError(GenerationError::MissingApiKey { env_var })) => {
            assert_eq!(env_var, "SIFT_TEST_UNSET_GENERATION_KEY");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("generator built without a key"),
    }
}
