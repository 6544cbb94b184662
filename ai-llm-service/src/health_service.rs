//! Universal health service for LLM backends (Ollama, OpenAI).
//!
//! Lightweight probes for the supported providers:
//! - Ollama: `GET {endpoint}/api/tags` (best-effort model existence check)
//! - OpenAI: `GET {endpoint}/v1/models` with Bearer auth
//!
//! The returned [`HealthStatus`] is JSON-serializable and suitable for a
//! `/health` endpoint. [`HealthService::check`] is resilient and never fails
//! (errors are mapped to `ok=false`).

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{
    AiLlmError, HttpError, ProviderError, ProviderErrorKind, make_snippet,
};

/// A serializable health snapshot for a single provider/config.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend/provider (e.g., "Ollama", "OpenAI").
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Model identifier relevant to the probe.
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured latency of the probe in milliseconds.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    #[inline]
    fn from_probe(
        cfg: &LlmModelConfig,
        ok: bool,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: format!("{:?}", cfg.provider),
            endpoint: cfg.endpoint.clone(),
            model: Some(cfg.model.clone()),
            ok,
            latency_ms,
            message: message.into(),
        }
    }
}

/// A universal health checker that reuses a single HTTP client.
#[derive(Debug)]
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a checker with the given probe timeout (default 10s).
    ///
    /// # Errors
    /// [`AiLlmError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, AiLlmError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probes the backend described by `cfg`. Never fails: connectivity and
    /// protocol errors come back as `ok=false` with the error message.
    pub async fn check(&self, cfg: &LlmModelConfig) -> HealthStatus {
        let started = Instant::now();
        let probe = match cfg.provider {
            LlmProvider::Ollama => self.try_ollama(cfg).await,
            LlmProvider::OpenAI => self.try_openai(cfg).await,
        };
        let latency_ms = started.elapsed().as_millis();

        match probe {
            Ok(message) => HealthStatus::from_probe(cfg, true, latency_ms, message),
            Err(e) => {
                warn!(provider = ?cfg.provider, endpoint = %cfg.endpoint, error = %e, "health probe failed");
                HealthStatus::from_probe(cfg, false, latency_ms, e.to_string())
            }
        }
    }

    /// Strict Ollama probe: `GET /api/tags`, then a best-effort check that
    /// the configured model is among the local tags.
    async fn try_ollama(&self, cfg: &LlmModelConfig) -> Result<String, AiLlmError> {
        let url = format!("{}/api/tags", cfg.endpoint.trim_end_matches('/'));
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                LlmProvider::Ollama,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url,
                    snippet: make_snippet(&text),
                }),
            )
            .into());
        }

        let tags: TagsResponse = resp.json().await.map_err(|e| {
            ProviderError::new(
                LlmProvider::Ollama,
                ProviderErrorKind::Decode(format!("serde error: {e}")),
            )
        })?;

        // Tags look like "llama3.1:8b"; match on the name part.
        let present = tags
            .models
            .iter()
            .any(|m| m.name == cfg.model || m.name.starts_with(&format!("{}:", cfg.model)));

        Ok(if present {
            format!("model `{}` available", cfg.model)
        } else {
            format!("endpoint reachable; model `{}` not in /api/tags", cfg.model)
        })
    }

    /// Strict OpenAI probe: `GET /v1/models` with Bearer auth, then a
    /// best-effort check that the configured model is listed.
    async fn try_openai(&self, cfg: &LlmModelConfig) -> Result<String, AiLlmError> {
        let api_key = cfg.api_key.as_deref().ok_or_else(|| {
            ProviderError::new(LlmProvider::OpenAI, ProviderErrorKind::MissingApiKey)
        })?;

        let url = format!("{}/v1/models", cfg.endpoint.trim_end_matches('/'));
        let resp = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                LlmProvider::OpenAI,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url,
                    snippet: make_snippet(&text),
                }),
            )
            .into());
        }

        let models: ModelsResponse = resp.json().await.map_err(|e| {
            ProviderError::new(
                LlmProvider::OpenAI,
                ProviderErrorKind::Decode(format!("serde error: {e}")),
            )
        })?;

        let present = models.data.iter().any(|m| m.id == cfg.model);
        Ok(if present {
            format!("model `{}` available", cfg.model)
        } else {
            format!("endpoint reachable; model `{}` not listed", cfg.model)
        })
    }
}

/// Response body subset for Ollama `GET /api/tags`.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Debug, Deserialize)]
struct TagModel {
    name: String,
}

/// Response body subset for OpenAI `GET /v1/models`.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_reports_not_ok() {
        let svc = HealthService::new(Some(1)).unwrap();
        let cfg = LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3.1".into(),
            // Reserved TEST-NET-1 address; connections fail fast or time out.
            endpoint: "http://192.0.2.1:1".into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(1),
        };

        let status = svc.check(&cfg).await;
        assert!(!status.ok);
        assert_eq!(status.provider, "Ollama");
        assert!(!status.message.is_empty());
    }
}
