//! Chat-completion client used to generate sales copy.
//!
//! Wraps an OpenAI-compatible `/chat/completions` endpoint with [`reqwest`]
//! and implements [`CopyGenerator`] on top of it.

use std::time::Instant;

use async_trait::async_trait;
use salescopy_core::copy::CreateCopyInput;
use salescopy_core::generation::{
    parse_generated, render_prompt, CopyGenerator, GeneratedCopy, GenerationError,
};
use serde::{Deserialize, Serialize};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection settings for the completion API.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    /// Base URL, e.g. `https://api.openai.com/v1`. A trailing slash is ignored.
    pub base_url: String,
    pub model: String,
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the chat-completion transport.
#[derive(Debug, thiserror::Error)]
pub enum ChatCompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The response carried no choices, or the first choice had no content.
    #[error("Completion API returned no choices")]
    NoChoices,
}

impl From<ChatCompletionError> for GenerationError {
    fn from(err: ChatCompletionError) -> Self {
        match err {
            ChatCompletionError::Request(e) if e.is_decode() => {
                GenerationError::MalformedPayload(e.to_string())
            }
            ChatCompletionError::Request(e) => GenerationError::Transport(e.to_string()),
            ChatCompletionError::ApiError { status, body } => GenerationError::Api { status, body },
            ChatCompletionError::NoChoices => GenerationError::EmptyResponse,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Subset of the `/chat/completions` response that is read.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for a chat-completion API.
pub struct ChatCompletionClient {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl ChatCompletionClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GenerationConfig) -> Self {
        Self { client, config }
    }

    /// Send a single user message and return the first choice's content.
    ///
    /// No retries are attempted.
    pub async fn complete(&self, prompt: &str) -> Result<String, ChatCompletionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: ChatResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatCompletionError::NoChoices)
    }

    /// Return the response unchanged on success, or an
    /// [`ChatCompletionError::ApiError`] carrying the status and body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChatCompletionError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ChatCompletionError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CopyGenerator for ChatCompletionClient {
    async fn generate(&self, input: &CreateCopyInput) -> Result<GeneratedCopy, GenerationError> {
        let prompt = render_prompt(input);
        let started = Instant::now();

        let content = self.complete(&prompt).await.map_err(|e| {
            tracing::warn!(model = %self.config.model, error = %e, "Copy generation failed");
            GenerationError::from(e)
        })?;

        tracing::debug!(
            model = %self.config.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Completion received"
        );

        parse_generated(&content).inspect_err(|e| {
            tracing::warn!(model = %self.config.model, error = %e, "Completion content rejected");
        })
    }
}
