//! Copy generation contract: prompt rendering, completion parsing, and the
//! [`CopyGenerator`] trait implemented by the chat-completion client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::copy::CreateCopyInput;

/// Maximum title length the model is asked to respect.
pub const TITLE_MAX_CHARS: usize = 20;

/// Description length range the model is asked to respect.
pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Title and description returned by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedCopy {
    pub title: String,
    pub description: String,
}

/// Failure modes of a generation call. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response (network, DNS, TLS, timeout).
    #[error("Generation request failed: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status (bad key, quota, outage).
    #[error("Generation API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The API answered but returned no usable completion.
    #[error("Generation API returned no completion")]
    EmptyResponse,

    /// The completion content was not the expected `{title, description}` object.
    #[error("Generation returned a malformed payload: {0}")]
    MalformedPayload(String),
}

/// Produces a title/description pair for a validated create input.
#[async_trait]
pub trait CopyGenerator: Send + Sync {
    async fn generate(&self, input: &CreateCopyInput) -> Result<GeneratedCopy, GenerationError>;
}

/// Render the user prompt sent to the model.
///
/// The copy is written for a Japanese audience, so the prompt is Japanese.
pub fn render_prompt(input: &CreateCopyInput) -> String {
    format!(
        "以下の情報に基づき、ターゲット『{target}』向けに、商品『{product}』（特徴: {features}）\
         の配信チャネル『{channel}』、トーン『{tone}』に最適な販促コピーを生成してください。\n\
         \n\
         出力形式は以下のJSON形式でお願いします：\n\
         {{\n  \"title\": \"タイトル（{title_max}文字以内）\",\n  \
         \"description\": \"本文（{desc_min}〜{desc_max}文字以内）\"\n}}",
        product = input.product_name,
        features = input.product_features,
        target = input.target,
        channel = input.channel,
        tone = input.tone,
        title_max = TITLE_MAX_CHARS,
        desc_min = DESCRIPTION_MIN_CHARS,
        desc_max = DESCRIPTION_MAX_CHARS,
    )
}

/// Decode completion content into a [`GeneratedCopy`].
///
/// Models sometimes wrap JSON in a Markdown code fence; that wrapper is
/// stripped. Length limits are not enforced here.
pub fn parse_generated(content: &str) -> Result<GeneratedCopy, GenerationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    serde_json::from_str(strip_code_fence(trimmed))
        .map_err(|e| GenerationError::MalformedPayload(e.to_string()))
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return s;
    };
    // Optional language tag, with or without a newline after it.
    body.trim_start_matches(|c: char| c.is_ascii_alphabetic()).trim()
}
