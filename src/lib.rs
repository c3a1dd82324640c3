//! # translate-serve
//!
//! HTTP translation service backed by Groq chat completions.
//!
//! One endpoint, one fixed pipeline: render a two-message chat prompt from
//! `(language, text)`, forward it to the provider's chat-completions
//! endpoint, extract the assistant text from the structured reply, and
//! return it verbatim. There is no retry, caching, or fallback — upstream
//! failures propagate to the caller as failure statuses.
//!
//! ## Example
//!
//! ```rust,no_run
//! use translate_serve::config::GroqConfig;
//! use translate_serve::pipeline::{TranslationPipeline, TranslationRequest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GroqConfig {
//!     api_key: Some("your-api-key".to_string()),
//!     ..GroqConfig::default()
//! };
//!
//! let pipeline = TranslationPipeline::from_config(&config)?;
//! let request = TranslationRequest {
//!     language: "French".to_string(),
//!     text: "hello".to_string(),
//! };
//! let output = pipeline.translate(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub(crate) mod response_parser;
pub mod server;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{AppConfig, GroqConfig, ServerConfig};
pub use error::{TranslateError, TranslateResult};
pub use pipeline::{TranslationPipeline, TranslationRequest};
pub use prompt::{ChatMessage, MessageRole, PromptTemplate};
pub use provider::{CompletionProvider, GroqClient};
