//! Core [`Transformer`] trait and [`ApiTransformer`] implementation.
//!
//! `ApiTransformer` calls any OpenAI-compatible `/chat/completions` endpoint
//! — OpenAI, Groq, Together.ai, LM Studio, vLLM, etc.  All connection details
//! come from the shared [`ApiConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::{self, SharedConfig};
use crate::transform::extract::extract_json_field;
use crate::transform::prompt::PromptSpec;
use crate::transform::{ServiceType, TransformError};

/// Fixed sampling temperature — low, to minimise stylistic drift.
const TEMPERATURE: f64 = 0.1;

/// Output-token ceiling: generous for a paragraph of text, but bounded.
const MAX_TOKENS: u32 = 4000;

/// HTTP-level backstop so an abandoned request eventually releases its
/// connection.  The caller-facing deadline lives in the bridge.
const REQUEST_TIMEOUT_SECS: u64 = 120;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Chat-completion envelope, reduced to the fields this application consumes.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Backend error envelope (`{"error": {"message", "type", "code"}}`).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    kind: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

// ---------------------------------------------------------------------------
// Transformer trait
// ---------------------------------------------------------------------------

/// Async trait for LLM-backed text transformation.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn Transformer>` and handed to the bridge).
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Run one stateless request/response cycle for `text`.
    async fn transform(&self, text: &str, service: ServiceType)
        -> Result<String, TransformError>;
}

// ---------------------------------------------------------------------------
// ApiTransformer
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/chat/completions` endpoint.
///
/// Each call takes a consistent snapshot of the shared configuration before
/// doing anything else, so a concurrent settings save never affects a request
/// mid-flight.  Preconditions are checked in order (configured → non-empty
/// input → parseable URL) and short-circuit without any network I/O.
pub struct ApiTransformer {
    client: reqwest::Client,
    config: SharedConfig,
}

impl ApiTransformer {
    /// Build an `ApiTransformer` over the shared configuration.
    ///
    /// A default client is used as a last-resort fallback if the builder
    /// fails (should never happen in practice).
    pub fn new(config: SharedConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, config }
    }

    /// Interpret a non-2xx, non-mapped status: surface the backend's error
    /// message when the body carries one, otherwise a generic message.
    async fn decode_error_envelope(
        status: StatusCode,
        response: reqwest::Response,
    ) -> TransformError {
        if let Ok(envelope) = response.json::<ChatCompletionResponse>().await {
            if let Some(err) = envelope.error {
                return TransformError::Api(err.message);
            }
        }
        TransformError::Api(format!("unexpected status {}", status.as_u16()))
    }
}

#[async_trait]
impl Transformer for ApiTransformer {
    /// Send `text` to the configured endpoint for the requested `service`.
    ///
    /// The prompt template and the user's text travel as a single user-role
    /// message; the response is decoded down to the one JSON field the
    /// prompt demands.
    async fn transform(
        &self,
        text: &str,
        service: ServiceType,
    ) -> Result<String, TransformError> {
        let config = config::snapshot(&self.config);

        // Preconditions, first match wins — no network I/O on violation.
        if !config.is_configured() {
            return Err(TransformError::NotConfigured);
        }
        if text.is_empty() {
            return Err(TransformError::EmptyInput);
        }
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let url = Url::parse(&url).map_err(|_| TransformError::InvalidEndpoint)?;

        let spec = PromptSpec::for_service(service);
        let content = format!("{}\n\n{}", spec.render(), text);

        let body = serde_json::json!({
            "model":       config.model,
            "messages": [
                { "role": "user", "content": content }
            ],
            "temperature": TEMPERATURE,
            "max_tokens":  MAX_TOKENS
        });

        log::info!("sending {service} request to {}", config.base_url);
        log::debug!("model: {}", config.model);

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        log::info!("received response with status {status}");

        match status {
            s if s.is_success() => {
                let envelope: ChatCompletionResponse = response
                    .json()
                    .await
                    .map_err(|e| TransformError::MalformedJson(e.to_string()))?;

                let content = envelope
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .ok_or(TransformError::NoContent)?;

                log::debug!("model output ({} chars)", content.len());
                extract_json_field(&content, spec.json_field)
            }
            StatusCode::UNAUTHORIZED => {
                log::error!("unauthorized - check API key");
                Err(TransformError::Unauthorized)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                log::error!("rate limit exceeded");
                Err(TransformError::RateLimited)
            }
            s if s.is_server_error() => {
                log::error!("server error ({})", s.as_u16());
                Err(TransformError::Server(s.as_u16()))
            }
            s => {
                let err = Self::decode_error_envelope(s, response).await;
                log::error!("request failed: {err}");
                Err(err)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
