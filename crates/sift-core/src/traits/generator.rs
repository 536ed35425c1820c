use std::time::Duration;

use crate::errors::SiftResult;

/// Everything a generation call needs. Borrowed from the orchestrator's locals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest<'a> {
    pub system_instruction: &'a str,
    /// Grounded context. May be empty.
    pub context: &'a str,
    pub question: &'a str,
    pub model: &'a str,
    /// Time left in the caller's budget. Implementations must not run past it.
    pub timeout: Option<Duration>,
}

/// Answer generation backed by a language model.
pub trait IGenerator: Send + Sync {
    /// Generate an answer for the question, grounded on the context.
    fn generate(&self, request: &GenerationRequest<'_>) -> SiftResult<String>;

    /// Human-readable generator name.
    fn name(&self) -> &str;
}
