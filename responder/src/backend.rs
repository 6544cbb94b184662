//! The delegated-call seam.
//!
//! The responder never talks to a concrete LLM client; it goes through
//! [`AnswerBackend`] so the production service and deterministic test stubs
//! are interchangeable.

use ai_llm_service::{AiLlmError, LlmService};
use async_trait::async_trait;

/// Capability of turning a question into generated text.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    /// Generates an answer for the question text.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] when the underlying call fails.
    async fn generate(&self, question: &str) -> Result<String, AiLlmError>;
}

#[async_trait]
impl AnswerBackend for LlmService {
    async fn generate(&self, question: &str) -> Result<String, AiLlmError> {
        // The question is forwarded verbatim; no prompt template, no system
        // message.
        LlmService::generate(self, question, None).await
    }
}
