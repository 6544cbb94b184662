//! Single-profile LLM facade shared by the application.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - The underlying provider client is created lazily on first use and
//!   reused afterwards.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::LlmService;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ai_llm_service::AiLlmError> {
//! let svc = Arc::new(LlmService::from_env()?);
//! let answer = svc.generate("When is wheat ready to harvest?", None).await?;
//! println!("{answer}");
//! # Ok(()) }
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::default_config::config_from_env;
use crate::config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
use crate::error_handler::{AiLlmError, ConfigError, validate_http_endpoint};
use crate::health_service::{HealthService, HealthStatus};
use crate::services::{ollama_service::OllamaService, open_ai_service::OpenAiService};

/// Facade over the provider clients for one chat model config.
#[derive(Debug)]
pub struct LlmService {
    cfg: LlmModelConfig,
    ollama: RwLock<Option<Arc<OllamaService>>>,
    openai: RwLock<Option<Arc<OpenAiService>>>,
    health: HealthService,
}

impl LlmService {
    /// Creates the service for the given config.
    ///
    /// Validates the model name and endpoint scheme up front so that a bad
    /// config fails at startup, not on the first request.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyModel`] for an empty model name
    /// - [`ConfigError::InvalidFormat`] for a schemeless endpoint
    /// - [`AiLlmError::HttpTransport`] if the health client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        validate_http_endpoint("endpoint", &cfg.endpoint)?;

        // Probes are cheap; cap them at 10s regardless of the generate
        // timeout.
        let probe_timeout = cfg.timeout_secs.map_or(10, |t| t.min(10));

        Ok(Self {
            cfg,
            ollama: RwLock::new(None),
            openai: RwLock::new(None),
            health: HealthService::new(Some(probe_timeout))?,
        })
    }

    /// Creates the service from environment variables (see
    /// [`crate::config::default_config`]).
    pub fn from_env() -> Result<Self, AiLlmError> {
        Self::new(config_from_env()?)
    }

    /// The active model config.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Generates text with the configured provider.
    ///
    /// `system` applies to chat-style providers (OpenAI); Ollama's plain
    /// generate endpoint takes the prompt only.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if client construction or generation fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        match self.cfg.provider {
            LlmProvider::Ollama => self.get_or_init_ollama().await?.generate(prompt).await,
            LlmProvider::OpenAI => {
                self.get_or_init_openai()
                    .await?
                    .generate(prompt, system)
                    .await
            }
        }
    }

    /// Health snapshot for the configured backend. Never fails; probe errors
    /// come back as `ok=false`.
    pub async fn health(&self) -> HealthStatus {
        self.health.check(&self.cfg).await
    }

    async fn get_or_init_ollama(&self) -> Result<Arc<OllamaService>, AiLlmError> {
        if let Some(cli) = self.ollama.read().await.as_ref() {
            return Ok(cli.clone());
        }
        let mut slot = self.ollama.write().await;
        if let Some(cli) = slot.as_ref() {
            return Ok(cli.clone());
        }
        let cli = Arc::new(OllamaService::new(self.cfg.clone())?);
        *slot = Some(cli.clone());
        Ok(cli)
    }

    async fn get_or_init_openai(&self) -> Result<Arc<OpenAiService>, AiLlmError> {
        if let Some(cli) = self.openai.read().await.as_ref() {
            return Ok(cli.clone());
        }
        let mut slot = self.openai.write().await;
        if let Some(cli) = slot.as_ref() {
            return Ok(cli.clone());
        }
        let cli = Arc::new(OpenAiService::new(self.cfg.clone())?);
        *slot = Some(cli.clone());
        Ok(cli)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3.1".into(),
            endpoint: "http://localhost:11434".into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(LlmService::new(cfg()).is_ok());
    }

    #[test]
    fn rejects_empty_model() {
        let mut c = cfg();
        c.model = "  ".into();
        let err = LlmService::new(c).unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::EmptyModel)));
    }

    #[test]
    fn rejects_schemeless_endpoint() {
        let mut c = cfg();
        c.endpoint = "localhost:11434".into();
        assert!(LlmService::new(c).is_err());
    }
}
