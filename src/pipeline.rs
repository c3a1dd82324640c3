//! The translation pipeline: prompt render → generation call → extraction.
//!
//! A strictly sequential three-stage transform executed once per request.
//! Each invocation builds its own prompt and receives its own reply; there
//! is no state shared between invocations and no caching of results.

use std::sync::Arc;

use tracing::debug;

use crate::config::GroqConfig;
use crate::error::TranslateResult;
use crate::prompt::PromptTemplate;
use crate::provider::{CompletionProvider, GroqClient};
use crate::response_parser::ResponseParser;

use serde::{Deserialize, Serialize};

/// A single translation request: target language plus source text.
///
/// Both fields are free-form; language names are not validated against any
/// known set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub language: String,
    pub text: String,
}

/// The composed pipeline, constructed once at startup and shared across
/// requests.
pub struct TranslationPipeline {
    template: PromptTemplate,
    provider: Arc<dyn CompletionProvider>,
}

impl TranslationPipeline {
    /// Compose a pipeline from a template and a provider.
    pub fn new(template: PromptTemplate, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { template, provider }
    }

    /// Build the production pipeline: default template over a [`GroqClient`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TranslateError::ConfigurationError`] when the
    /// provider config is incomplete.
    pub fn from_config(config: &GroqConfig) -> TranslateResult<Self> {
        let provider = GroqClient::new(config.clone())?;
        Ok(Self::new(PromptTemplate::default(), Arc::new(provider)))
    }

    /// Run one request through the pipeline.
    ///
    /// Linear composition with no branching: render, complete, extract.
    /// Every upstream failure propagates unchanged; no default text is ever
    /// substituted.
    pub async fn translate(&self, request: &TranslationRequest) -> TranslateResult<String> {
        let prompt = self.template.render(&request.language, &request.text);

        debug!(
            provider = self.provider.provider_name(),
            language = %request.language,
            text_chars = request.text.chars().count(),
            "Running translation pipeline"
        );

        let reply = self.provider.complete(prompt).await?;
        ResponseParser::extract_text(&reply)
    }
}
