//! Chat-completions wire types.
//!
//! The subset of the OpenAI-compatible protocol this service actually uses:
//! a non-streaming request and the structured reply it produces. Optional
//! sampling parameters are omitted from the wire unless configured.

use serde::{Deserialize, Serialize};

use crate::prompt::ChatMessage;

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Chat completion reply body.
///
/// Metadata fields are tolerated but unused; extraction only cares about the
/// first choice's message content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// Choice in a chat completion reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReplyMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message inside a reply choice.
///
/// `content` stays optional: some provider failure modes return a choice
/// without one, which the extractor reports as a malformed reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReplyMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
