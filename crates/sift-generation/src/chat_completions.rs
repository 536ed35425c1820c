//! OpenAI-compatible chat completions client.
//!
//! One blocking request per answer. No retries: a failed generation call
//! surfaces to the caller as an upstream failure. The request timeout is the
//! configured one, shortened to the caller's remaining budget.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use sift_core::config::GenerationConfig;
use sift_core::errors::{GenerationError, SiftResult};
use sift_core::traits::{GenerationRequest, IGenerator};
use tracing::debug;

use crate::prompt::build_user_prompt;

/// HTTP generator.
pub struct ChatCompletionsGenerator {
    client: Client,
    api_key: String,
    endpoint: String,
    temperature: f32,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// First choice's content; absent content is an empty answer.
    fn into_answer(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}

impl ChatCompletionsGenerator {
    /// Build a generator from config and an already-resolved API key.
    pub fn from_config(config: &GenerationConfig, api_key: String) -> SiftResult<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            temperature: config.temperature,
            timeout,
        })
    }

    /// The configured timeout, shortened to the caller's budget.
    fn request_timeout(&self, budget: Option<Duration>) -> Duration {
        budget.map_or(self.timeout, |b| self.timeout.min(b))
    }

    fn send(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let timeout = self.request_timeout(request.timeout);
        if timeout.is_zero() {
            return Err(GenerationError::Timeout { after_ms: 0 });
        }
        let user = build_user_prompt(request.context, request.question);
        let body = ChatRequest {
            model: request.model,
            messages: [
                Message {
                    role: "system",
                    content: request.system_instruction,
                },
                Message {
                    role: "user",
                    content: &user,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .json(&body)
            .send()
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                transport_error(e, timeout)
            } else {
                GenerationError::MalformedResponse {
                    reason: e.to_string(),
                }
            }
        })?;

        let answer = parsed.into_answer();
        debug!(model = request.model, chars = answer.len(), "completion received");
        Ok(answer)
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout {
            after_ms: timeout.as_millis() as u64,
        }
    } else {
        GenerationError::RequestFailed {
            reason: e.to_string(),
        }
    }
}

impl IGenerator for ChatCompletionsGenerator {
    fn generate(&self, request: &GenerationRequest<'_>) -> SiftResult<String> {
        Ok(self.send(request)?)
    }

    fn name(&self) -> &str {
        "chat-completions"
    }
}
