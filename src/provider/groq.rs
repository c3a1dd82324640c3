//! Groq chat-completions client.
//!
//! One outbound HTTP call per invocation, non-streaming, no retry and no
//! backoff. Failures map onto the service error taxonomy and propagate to
//! the caller unchanged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use super::CompletionProvider;
use crate::config::GroqConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::prompt::ChatMessage;

/// Client for Groq's OpenAI-compatible chat-completions endpoint.
#[derive(Debug)]
pub struct GroqClient {
    http_client: reqwest::Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new client from config.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::ConfigurationError`] if the API key is
    /// missing or the HTTP client cannot be built.
    pub fn new(config: GroqConfig) -> TranslateResult<Self> {
        if config.api_key.is_none() {
            return Err(TranslateError::configuration_error(
                "Groq API key is required",
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
            TranslateError::configuration_error(format!("Failed to build HTTP client: {e}"))
        })?;

        debug!(
            provider = "groq",
            base_url = %config.base_url,
            model = %config.model,
            timeout_seconds = ?config.request_timeout_seconds,
            "Groq client initialized"
        );

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Build the bearer-auth headers for the chat-completions call.
    fn build_auth_headers(api_key: &str) -> TranslateResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                TranslateError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );

        Ok(headers)
    }

    fn build_request(&self, messages: Vec<ChatMessage>) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Execute a single HTTP request against the provider.
    async fn execute_request(
        &self,
        request: &ChatCompletionRequest,
    ) -> TranslateResult<ChatCompletionResponse> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let headers = Self::build_auth_headers(api_key)?;

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslateError::timeout(self.config.request_timeout_seconds.unwrap_or_default())
                } else {
                    TranslateError::request_failed(
                        format!("Request failed: {e}"),
                        Some(Box::new(e)),
                    )
                }
            })?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
    ) -> TranslateResult<ChatCompletionResponse> {
        let request = self.build_request(messages);

        debug!(
            provider = "groq",
            model = %request.model,
            message_count = request.messages.len(),
            "Executing chat completion request"
        );

        self.execute_request(&request).await
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}

/// Map non-success HTTP responses onto the error taxonomy.
async fn handle_error_response(response: reqwest::Response) -> TranslateError {
    let status = response.status();
    let headers = response.headers().clone();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    match status.as_u16() {
        401 => TranslateError::authentication_failed("Invalid API key or authentication failed"),
        429 => {
            let retry_after_seconds = headers
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            TranslateError::rate_limit_exceeded(retry_after_seconds)
        }
        code => TranslateError::generation_failed(code, error_text),
    }
}

/// Parse a successful HTTP response into the structured reply.
async fn parse_success_response(
    response: reqwest::Response,
) -> TranslateResult<ChatCompletionResponse> {
    let raw_body = response
        .text()
        .await
        .map_err(|e| TranslateError::malformed_reply(format!("Failed to read reply: {e}")))?;

    serde_json::from_str(&raw_body)
        .map_err(|e| TranslateError::malformed_reply(format!("Invalid reply body: {e}")))
}
