use ai_llm_service::AiLlmError;
use thiserror::Error;

/// Errors produced while answering a question.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The delegated backend call failed.
    #[error(transparent)]
    Backend(#[from] AiLlmError),

    /// The backend returned an empty or whitespace-only answer; the answer
    /// contract requires a non-empty string.
    #[error("backend returned an empty answer")]
    EmptyAnswer,
}
