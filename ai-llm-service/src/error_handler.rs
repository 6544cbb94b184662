//! Unified error handling for `ai-llm-service`.
//!
//! This module exposes a single top-level error type [`AiLlmError`] for the
//! whole library and groups domain-specific errors in nested types
//! ([`ConfigError`], [`ProviderError`]). Small helpers for reading/validating
//! environment variables are provided and return the unified [`Result<T>`]
//! alias.
//!
//! All messages include the suffix `[AI LLM Service]` to simplify attribution
//! in logs.

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::llm_provider::LlmProvider;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiLlmError>;

/// Top-level error for the `ai-llm-service` crate.
///
/// Variants wrap domain-specific types (config/provider) and the common
/// transport case. Prefer adding new sub-types for distinct domains instead
/// of growing this enum indefinitely.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiLlmError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Errors reported by a concrete provider client (Ollama/OpenAI).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (`reqwest::Error`), including
    /// connect failures and client-side timeouts.
    #[error("[AI LLM Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for environment/config-driven setup.
///
/// Keep this focused: only errors that realistically happen at config
/// load/validation time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[AI LLM Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (ports, limits, timeouts).
    #[error("[AI LLM Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_MAX_TOKENS`, `OLLAMA_PORT`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u32`).
        reason: &'static str,
    },

    /// Unsupported provider in `LLM_KIND`.
    #[error("[AI LLM Service] unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[AI LLM Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OLLAMA_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// Model name was empty or whitespace.
    #[error("[AI LLM Service] model name must not be empty")]
    EmptyModel,
}

/// Error raised by a provider client, tagged with the provider it came from.
#[derive(Debug, Error)]
#[error("[AI LLM Service] {provider:?} provider error: {kind}")]
pub struct ProviderError {
    /// Provider the failing client was talking to.
    pub provider: LlmProvider,
    /// What went wrong.
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: LlmProvider, kind: ProviderErrorKind) -> Self {
        Self { provider, kind }
    }
}

/// Provider-agnostic failure classification.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    /// The config selected a different provider than this client handles.
    #[error("config selected a different provider for this client")]
    InvalidProvider,

    /// The provider requires an API key and none was configured.
    #[error("API key is required but missing")]
    MissingApiKey,

    /// Endpoint was empty or not http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error(transparent)]
    HttpStatus(HttpError),

    /// Response payload could not be decoded as expected.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A chat completion came back without any usable content.
    #[error("response contained no choices with content")]
    EmptyChoices,
}

/// Details of a non-2xx upstream response.
#[derive(Debug, Error)]
#[error("unexpected HTTP status {status} from {url}: {snippet}")]
pub struct HttpError {
    /// Numeric HTTP status code.
    pub status: StatusCode,
    /// Request URL.
    pub url: String,
    /// Short snippet of the response body.
    pub snippet: String,
}

/// Clamp an upstream body to a short, single-purpose log/error snippet.
pub fn make_snippet(text: &str) -> String {
    text.trim().chars().take(240).collect()
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            AiLlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start with
/// a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_is_trimmed_and_clamped() {
        assert_eq!(make_snippet("  hello  "), "hello");
        let long = "x".repeat(1000);
        assert_eq!(make_snippet(&long).len(), 240);
    }

    #[test]
    fn endpoint_validation() {
        assert!(validate_http_endpoint("OLLAMA_URL", "http://localhost:11434").is_ok());
        assert!(validate_http_endpoint("OLLAMA_URL", "https://api.openai.com").is_ok());
        let err = validate_http_endpoint("OLLAMA_URL", "localhost:11434").unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::InvalidFormat { var: "OLLAMA_URL", .. })
        ));
    }

    #[test]
    fn unset_optional_number_is_none() {
        assert!(matches!(env_opt_u32("AI_LLM_SERVICE_TEST_UNSET_U32"), Ok(None)));
    }

    #[test]
    fn unset_required_var_is_missing() {
        let err = must_env("AI_LLM_SERVICE_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::MissingVar(_))));
    }
}
