//! Generation client: the pipeline's one outward-facing stage.
//!
//! [`CompletionProvider`] is the seam between the pipeline and the network;
//! [`GroqClient`] is the production implementation. Tests substitute their
//! own provider behind the same trait.

pub mod groq;
pub mod types;

use async_trait::async_trait;

use crate::error::TranslateResult;
use crate::prompt::ChatMessage;
use types::ChatCompletionResponse;

pub use groq::GroqClient;

/// A chat-completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Forward the rendered messages and await the complete structured reply.
    async fn complete(&self, messages: Vec<ChatMessage>)
        -> TranslateResult<ChatCompletionResponse>;

    /// Short name for logs.
    fn provider_name(&self) -> &'static str;
}
