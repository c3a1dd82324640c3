//! Error types for the translation service.
//!
//! One taxonomy covers both lifecycles: configuration problems are fatal at
//! startup, everything else surfaces per request. Upstream failures are never
//! retried or masked — they propagate to the caller as-is.
//!
//! # Result Type
//!
//! Use [`TranslateResult<T>`] as a convenient alias for
//! `Result<T, TranslateError>`.

use thiserror::Error;
use tracing::{error, warn};

/// Convenient result type for pipeline operations.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

/// Errors that can occur while serving a translation.
///
/// Each variant can be converted to a caller-safe message via
/// [`user_message()`](Self::user_message); the HTTP status mapping lives with
/// the server layer.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Service configuration is invalid or incomplete.
    ///
    /// Raised once at startup (e.g. missing `GROQ_API_KEY`); the process
    /// refuses to start rather than failing every request later.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the provider could not be completed.
    ///
    /// Network or connectivity failure — the provider was never reached or
    /// the connection died mid-flight.
    #[error("Upstream request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying transport error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider rejected our credential.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },

    /// The provider is throttling requests.
    ///
    /// Surfaced to the caller unchanged; this service does not wait and
    /// retry on the caller's behalf.
    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Wait time advertised by the provider, or 60s if it sent none.
        retry_after_seconds: u64,
    },

    /// The provider refused or could not complete the generation.
    #[error("Generation failed with status {status}: {message}")]
    GenerationFailed {
        /// HTTP status returned by the provider.
        status: u16,
        /// Provider error body, verbatim.
        message: String,
    },

    /// The provider reply lacks the expected content field.
    #[error("Malformed reply: {message}")]
    MalformedReply {
        /// Details about what was missing or unparseable.
        message: String,
    },

    /// The configured client-side timeout elapsed.
    ///
    /// Only reachable when `request_timeout_seconds` is set; there is no
    /// timeout by default.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },
}

impl TranslateError {
    /// Convert to a message suitable for the HTTP error body.
    ///
    /// Technical detail (provider bodies, transport errors) is stripped;
    /// nothing secret or internal leaks to callers.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { .. } => {
                "Service is misconfigured. Please contact the operator".to_string()
            }
            Self::RequestFailed { .. } => {
                "Unable to reach the translation backend. Please try again".to_string()
            }
            Self::AuthenticationFailed { .. } => {
                "The translation backend rejected the service credentials".to_string()
            }
            Self::RateLimitExceeded {
                retry_after_seconds,
            } => {
                format!("Service is busy. Please wait {retry_after_seconds} seconds and try again")
            }
            Self::GenerationFailed { .. } => {
                "The translation backend could not complete the request".to_string()
            }
            Self::MalformedReply { .. } => {
                "Received an invalid reply from the translation backend".to_string()
            }
            Self::Timeout { .. } => "Request timed out. Please try again".to_string(),
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods log the error at the appropriate level. Use them instead
    // of constructing variants directly.

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(
            error_type = "configuration_error",
            message = %message,
            "Service configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Upstream request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(
            error_type = "authentication_failed",
            message = %message,
            "Provider authentication failed"
        );
        Self::AuthenticationFailed { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: u64) -> Self {
        warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds, "Provider rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn generation_failed(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        error!(
            error_type = "generation_failed",
            status,
            message = %message,
            "Provider could not complete generation"
        );
        Self::GenerationFailed { status, message }
    }

    pub fn malformed_reply(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(
            error_type = "malformed_reply",
            message = %message,
            "Provider reply format invalid"
        );
        Self::MalformedReply { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        warn!(
            error_type = "timeout",
            timeout_seconds, "Upstream request timed out"
        );
        Self::Timeout { timeout_seconds }
    }
}
