//! OpenAI-compatible embeddings API provider.
//!
//! Blocking HTTP client with a per-request timeout and bounded retry with
//! exponential backoff. Works with any endpoint that speaks the
//! `/v1/embeddings` request/response shape.
//!
//! A caller budget caps both each request and the retry loop: no attempt or
//! backoff sleep runs past it.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use sift_core::config::EmbeddingConfig;
use sift_core::errors::{EmbeddingError, SiftResult};
use sift_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

/// Longest sleep between retries.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// HTTP embedding provider.
pub struct ApiProvider {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    timeout: Duration,
    max_retries: u32,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: Option<usize>,
}

impl ApiProvider {
    /// Build a provider from config and an already-resolved API key.
    pub fn from_config(config: &EmbeddingConfig, api_key: String) -> SiftResult<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            model: config.model.clone(),
            api_key,
            endpoint: config.endpoint.clone(),
            dimensions: config.dimensions,
            timeout,
            max_retries: config.max_retries,
        })
    }

    /// Send an embedding request, retrying transient failures until
    /// `deadline`.
    fn request_embeddings(
        &self,
        texts: &[String],
        deadline: Option<Instant>,
    ) -> SiftResult<Vec<Vec<f32>>> {
        let mut attempt = 0;
        loop {
            let timeout = self.attempt_timeout(deadline);
            match self.send_request(texts, timeout) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    let pause = backoff(attempt);
                    if deadline.is_some_and(|d| Instant::now() + pause >= d) {
                        warn!(attempt, error = %e, "embedding budget exhausted, not retrying");
                        return Err(e.into());
                    }
                    warn!(attempt, error = %e, "embedding request failed, retrying");
                    std::thread::sleep(pause);
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// The configured timeout, shortened to what is left before `deadline`.
    fn attempt_timeout(&self, deadline: Option<Instant>) -> Duration {
        match deadline {
            Some(d) => self.timeout.min(d.saturating_duration_since(Instant::now())),
            None => self.timeout,
        }
    }

    /// One HTTP round trip.
    fn send_request(
        &self,
        texts: &[String],
        timeout: Duration,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if timeout.is_zero() {
            return Err(EmbeddingError::Timeout { after_ms: 0 });
        }
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: EmbedResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                transport_error(e, timeout)
            } else {
                EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                }
            }
        })?;

        let mut data = parsed.data;
        if data.len() != texts.len() {
            return Err(EmbeddingError::MalformedResponse {
                reason: format!("expected {} embeddings, got {}", texts.len(), data.len()),
            });
        }
        // Entries may arrive out of order; `index` is authoritative when present.
        data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));

        let embeddings: Vec<Vec<f32>> = data.into_iter().map(|d| d.embedding).collect();
        if self.dimensions > 0 {
            if let Some(bad) = embeddings.iter().find(|v| v.len() != self.dimensions) {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: bad.len(),
                });
            }
        }

        debug!(count = embeddings.len(), model = %self.model, "embeddings received");
        Ok(embeddings)
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> EmbeddingError {
    if e.is_timeout() {
        EmbeddingError::Timeout {
            after_ms: timeout.as_millis() as u64,
        }
    } else {
        EmbeddingError::RequestFailed {
            reason: e.to_string(),
        }
    }
}

/// `100ms * 2^attempt`, capped at `MAX_BACKOFF`.
fn backoff(attempt: u32) -> Duration {
    let millis = 2u64.saturating_pow(attempt).saturating_mul(100);
    Duration::from_millis(millis).min(MAX_BACKOFF)
}

/// Timeouts, transport errors, rate limiting and server errors are retried.
fn is_transient(e: &EmbeddingError) -> bool {
    match e {
        EmbeddingError::Timeout { .. } | EmbeddingError::RequestFailed { .. } => true,
        EmbeddingError::ApiStatus { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
        }
        _ => false,
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        self.embed_with_timeout(text, None)
    }

    fn embed_with_timeout(&self, text: &str, timeout: Option<Duration>) -> SiftResult<Vec<f32>> {
        let deadline = timeout.map(|t| Instant::now() + t);
        let results = self.request_embeddings(&[text.to_string()], deadline)?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::MalformedResponse {
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts, None)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
