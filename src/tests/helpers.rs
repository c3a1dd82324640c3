//! Helper functions for tests
//!
//! Common builders for stubbed upstream replies, test configuration against
//! a wiremock server, and a hand-written stub provider for exercising the
//! pipeline and server without HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use wiremock::MockServer;

use crate::config::GroqConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::pipeline::TranslationPipeline;
use crate::prompt::{ChatMessage, PromptTemplate};
use crate::provider::types::{ChatChoice, ChatCompletionResponse, ChatReplyMessage, ChatUsage};
use crate::provider::CompletionProvider;
use crate::server::{build_router, AppState};

/// Typed reply with one content-bearing choice plus metadata.
pub fn chat_reply(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        choices: vec![ChatChoice {
            message: ChatReplyMessage {
                role: Some("assistant".to_string()),
                content: Some(content.to_string()),
            },
            finish_reason: Some("stop".to_string()),
        }],
        model: Some("gemma2-9b-it".to_string()),
        usage: Some(ChatUsage {
            prompt_tokens: 12,
            completion_tokens: 4,
            total_tokens: 16,
        }),
    }
}

/// Realistic chat-completions success body for wiremock responses.
pub fn chat_completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1699000000,
        "model": "gemma2-9b-it",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 12,
            "completion_tokens": 4,
            "total_tokens": 16
        }
    })
}

/// Provider config pointed at a mock server.
pub fn mock_groq_config(mock_server: &MockServer) -> GroqConfig {
    GroqConfig {
        api_key: Some("test-key".to_string()),
        base_url: mock_server.uri(),
        ..GroqConfig::default()
    }
}

/// Production-shaped pipeline wired to a mock server.
pub fn mock_pipeline(mock_server: &MockServer) -> TranslationPipeline {
    TranslationPipeline::from_config(&mock_groq_config(mock_server))
        .expect("pipeline from mock config")
}

/// Canned provider behaviors for tests that stub at the trait seam.
pub enum StubBehavior {
    /// Reply with one choice carrying this content.
    Content(String),
    /// Reply with no choices at all.
    EmptyChoices,
    /// Fail as if the provider was unreachable.
    Unreachable,
    /// Fail as if the provider throttled us.
    RateLimited(u64),
}

/// Hand-written test double for the provider seam.
pub struct StubProvider {
    behavior: StubBehavior,
}

impl StubProvider {
    pub fn with_behavior(behavior: StubBehavior) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        _messages: Vec<ChatMessage>,
    ) -> TranslateResult<ChatCompletionResponse> {
        match &self.behavior {
            StubBehavior::Content(text) => Ok(chat_reply(text)),
            StubBehavior::EmptyChoices => Ok(ChatCompletionResponse {
                choices: vec![],
                model: None,
                usage: None,
            }),
            StubBehavior::Unreachable => Err(TranslateError::request_failed(
                "connection refused",
                None,
            )),
            StubBehavior::RateLimited(seconds) => {
                Err(TranslateError::rate_limit_exceeded(*seconds))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Pipeline over a stubbed provider.
pub fn stub_pipeline(behavior: StubBehavior) -> TranslationPipeline {
    TranslationPipeline::new(
        PromptTemplate::default(),
        Arc::new(StubProvider::with_behavior(behavior)),
    )
}

/// Router whose pipeline runs over a stubbed provider.
pub fn stub_router(behavior: StubBehavior) -> axum::Router {
    build_router(AppState {
        pipeline: Arc::new(stub_pipeline(behavior)),
    })
}
