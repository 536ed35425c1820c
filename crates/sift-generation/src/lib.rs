//! # sift-generation
//!
//! The generation collaborator. Turns a grounded context and a question into
//! an answer via an OpenAI-compatible chat completions endpoint.

pub mod chat_completions;
pub mod prompt;

pub use chat_completions::ChatCompletionsGenerator;
pub use prompt::build_user_prompt;

use sift_core::config::{api_key_from_env, GenerationConfig};
use sift_core::errors::{GenerationError, SiftResult};
use sift_core::traits::IGenerator;

/// Build the configured generator. Fails when the API key is not set.
pub fn create_generator(config: &GenerationConfig) -> SiftResult<Box<dyn IGenerator>> {
    let api_key = api_key_from_env(&config.api_key_env).ok_or_else(|| {
        GenerationError::MissingApiKey {
            env_var: config.api_key_env.clone(),
        }
    })?;
    Ok(Box::new(ChatCompletionsGenerator::from_config(config, api_key)?))
}
