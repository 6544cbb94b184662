use std::env;
use std::sync::Arc;

use ai_llm_service::LlmService;
use axum::http::HeaderValue;
use responder::AnswerBackend;

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
///
/// Built once in `start()` and passed to handlers by `Arc`; there is no
/// other process-wide mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Seam for the delegated LLM call. In production this is the LLM
    /// facade itself; tests swap in a deterministic stub.
    pub backend: Arc<dyn AnswerBackend>,
    /// Concrete LLM facade, used by the health endpoint.
    pub llm: Arc<LlmService>,
    /// The single browser origin admitted by CORS.
    pub frontend_origin: HeaderValue,
}

impl AppState {
    /// Builds state with the production backend (the LLM facade itself).
    pub fn new(llm: Arc<LlmService>, frontend_origin: HeaderValue) -> Self {
        Self {
            backend: llm.clone(),
            llm,
            frontend_origin,
        }
    }

    /// Replaces the answer backend, keeping everything else. Used to inject
    /// stubs.
    pub fn with_backend(mut self, backend: Arc<dyn AnswerBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Fails on an invalid LLM configuration (see `ai-llm-service` env
    /// variables) or a malformed `FRONTEND_ORIGIN`.
    pub fn from_env() -> AppResult<Self> {
        let llm = Arc::new(LlmService::from_env()?);

        let origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".into());
        let frontend_origin =
            HeaderValue::from_str(&origin).map_err(|e| AppError::InvalidEnv {
                var: "FRONTEND_ORIGIN",
                reason: e.to_string(),
            })?;

        Ok(Self::new(llm, frontend_origin))
    }
}
