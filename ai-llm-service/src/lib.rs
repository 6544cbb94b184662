//! Shared LLM service: provider clients (Ollama/OpenAI), strict env-driven
//! configuration, unified errors, and best-effort health checks.
//!
//! The application-facing entry point is [`LlmService`]: a single-profile
//! facade constructed once (usually via [`LlmService::from_env`]), wrapped in
//! an `Arc`, and shared with whoever needs text generation.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod llm_service;
pub mod services;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::AiLlmError;
pub use health_service::HealthStatus;
pub use llm_service::LlmService;
