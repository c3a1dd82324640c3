//! Service configuration.
//!
//! Built once at process start from environment variables (plus CLI
//! overrides in the binary) and passed by reference into the components
//! that need it. There is no ambient global configuration state.

use serde::{Deserialize, Serialize};

use crate::error::{TranslateError, TranslateResult};

/// Environment variable holding the upstream credential.
pub const ENV_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable overriding the model identifier.
pub const ENV_MODEL: &str = "GROQ_MODEL";
/// Environment variable overriding the provider base URL.
pub const ENV_BASE_URL: &str = "GROQ_BASE_URL";

/// Provider-side configuration for the generation client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// Upstream credential. Absence is a startup-time fatal condition.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Fixed model identifier sent with every request.
    pub model: String,
    /// Optional sampling temperature; omitted from the wire when unset.
    pub temperature: Option<f64>,
    /// Optional completion cap; omitted from the wire when unset.
    pub max_tokens: Option<u32>,
    /// Optional client-side request timeout. `None` means no timeout.
    pub request_timeout_seconds: Option<u64>,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai".to_string(),
            model: "gemma2-9b-it".to_string(),
            temperature: None,
            max_tokens: None,
            request_timeout_seconds: None,
        }
    }
}

impl GroqConfig {
    /// Validate that the configuration is complete enough to start.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::ConfigurationError`] when the API key is
    /// missing.
    pub fn validate(&self) -> TranslateResult<()> {
        if self.api_key.is_none() {
            return Err(TranslateError::configuration_error(format!(
                "{ENV_API_KEY} is required"
            )));
        }
        Ok(())
    }
}

/// Listener configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Whole-service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub groq: GroqConfig,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for everything but the credential.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.groq.api_key = std::env::var(ENV_API_KEY).ok();
        if let Ok(model) = std::env::var(ENV_MODEL) {
            config.groq.model = model;
        }
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config.groq.base_url = base_url;
        }
        config
    }

    /// Validate the configuration; called once at startup.
    pub fn validate(&self) -> TranslateResult<()> {
        self.groq.validate()
    }
}
