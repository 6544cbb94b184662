//! Default LLM configs loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND` = provider kind (`ollama` or `openai`, default `ollama`)
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (default `http://localhost:11434`)
//! - `OLLAMA_MODEL`                = chat model (mandatory)
//!
//! OpenAI-specific:
//! - `OPENAI_API_KEY` = API key (mandatory)
//! - `OPENAI_MODEL`   = chat model (default `gpt-4o-mini`)
//! - `OPENAI_URL`     = API base (default `https://api.openai.com`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ConfigError, env_opt_u32, must_env},
};

/// Builds the chat model config for the provider selected by `LLM_KIND`.
///
/// # Errors
/// Propagates [`ConfigError`] for an unsupported kind or missing/invalid
/// provider-specific variables.
pub fn config_from_env() -> Result<LlmModelConfig, AiLlmError> {
    let kind = std::env::var("LLM_KIND").unwrap_or_else(|_| "ollama".into());
    match kind.parse::<LlmProvider>()? {
        LlmProvider::Ollama => config_ollama_chat(),
        LlmProvider::OpenAI => config_openai_chat(),
    }
}

/// Resolves the Ollama endpoint from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. the stock Ollama default `http://localhost:11434`
///
/// # Errors
/// [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is set but not a valid
/// port number.
fn ollama_endpoint() -> Result<String, AiLlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Ok("http://localhost:11434".into())
}

/// Constructs the **Ollama** chat config.
///
/// # Env
/// - `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.2)`
/// - `timeout_secs = Some(120)`
pub fn config_ollama_chat() -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.2),
        top_p: None,
        timeout_secs: Some(120),
    })
}

/// Constructs the **OpenAI** chat config.
///
/// # Env
/// - `OPENAI_API_KEY` (required)
/// - `OPENAI_MODEL`, `OPENAI_URL`, `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.2)`
/// - `timeout_secs = Some(60)`
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = std::env::var("OPENAI_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "gpt-4o-mini".into());
    let endpoint = std::env::var("OPENAI_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "https://api.openai.com".into());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.2),
        top_p: None,
        timeout_secs: Some(60),
    })
}
