//! Keyword-routed responder with a single public entry point.
//!
//! Public API: [`respond`]. It checks the question against the fixed crop
//! and intent keyword sets; on a match it delegates the question verbatim to
//! the [`AnswerBackend`] and returns the model answer, otherwise it returns
//! the fixed fallback string.

pub mod keywords;

mod backend;
mod error;

pub use backend::AnswerBackend;
pub use error::ResponderError;

use tracing::{debug, instrument};

/// Returned when the question mentions neither a known crop nor a
/// harvest-readiness intent.
pub const FALLBACK_ANSWER: &str = "Right now I'm a simple demo. I can answer basic harvest questions about wheat and tomatoes. Try asking, for example: 'When is wheat ready to harvest?' ";

/// Answers a harvest-readiness question.
///
/// Routing:
/// - question mentions a crop or a harvest intent → the full original
///   question is delegated to `backend` and its output returned;
/// - otherwise → [`FALLBACK_ANSWER`].
///
/// The returned answer is always non-empty: a blank delegated answer is
/// rejected as [`ResponderError::EmptyAnswer`].
///
/// # Errors
/// Propagates backend failures as [`ResponderError::Backend`].
///
/// # Example
/// ```no_run
/// # use responder::respond;
/// # use ai_llm_service::LlmService;
/// # #[tokio::main] async fn main() {
/// let llm = LlmService::from_env().unwrap();
/// let answer = respond(&llm, "When is wheat ready to harvest?").await.unwrap();
/// println!("{answer}");
/// # }
/// ```
#[instrument(skip_all, fields(question_len = question.len()))]
pub async fn respond(
    backend: &dyn AnswerBackend,
    question: &str,
) -> Result<String, ResponderError> {
    let crop = keywords::mentions_crop(question);
    let intent = keywords::mentions_harvest_intent(question);

    if !(crop || intent) {
        debug!("no crop or intent keyword; returning fallback");
        return Ok(FALLBACK_ANSWER.to_string());
    }

    debug!(crop, intent, "delegating to answer backend");
    let answer = backend.generate(question).await?;
    if answer.trim().is_empty() {
        return Err(ResponderError::EmptyAnswer);
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ai_llm_service::error_handler::{ProviderError, ProviderErrorKind};
    use ai_llm_service::{AiLlmError, LlmProvider};
    use async_trait::async_trait;

    use super::*;

    /// Deterministic backend: always replies with the same string and counts
    /// how often it was called.
    struct StubBackend {
        reply: &'static str,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnswerBackend for StubBackend {
        async fn generate(&self, _question: &str) -> Result<String, AiLlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    /// Backend that always fails, mimicking an unusable upstream.
    struct FailingBackend;

    #[async_trait]
    impl AnswerBackend for FailingBackend {
        async fn generate(&self, _question: &str) -> Result<String, AiLlmError> {
            Err(ProviderError::new(LlmProvider::Ollama, ProviderErrorKind::EmptyChoices).into())
        }
    }

    #[tokio::test]
    async fn crop_keyword_delegates_to_backend() {
        let backend = StubBackend::new("STUB");
        let answer = respond(&backend, "When is wheat ready to harvest?")
            .await
            .unwrap();
        assert_eq!(answer, "STUB");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn intent_keyword_delegates_to_backend() {
        let backend = StubBackend::new("STUB");
        let answer = respond(&backend, "Is it ripe yet?").await.unwrap();
        assert_eq!(answer, "STUB");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn unrelated_question_gets_fallback_without_delegation() {
        let backend = StubBackend::new("STUB");
        let answer = respond(&backend, "What is the capital of France?")
            .await
            .unwrap();
        assert_eq!(answer, FALLBACK_ANSWER);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let backend = StubBackend::new("STUB");
        let answer = respond(&backend, "IS MY WHEAT DONE?").await.unwrap();
        assert_eq!(answer, "STUB");
    }

    #[tokio::test]
    async fn identical_questions_get_identical_answers() {
        let backend = StubBackend::new("STUB");
        let q = "How firm should peppers be?";
        let first = respond(&backend, q).await.unwrap();
        let second = respond(&backend, q).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn backend_failure_propagates() {
        let err = respond(&FailingBackend, "harvest time?").await.unwrap_err();
        assert!(matches!(err, ResponderError::Backend(_)));
    }

    #[tokio::test]
    async fn blank_answer_is_rejected() {
        let backend = StubBackend::new("   ");
        let err = respond(&backend, "harvest time?").await.unwrap_err();
        assert!(matches!(err, ResponderError::EmptyAnswer));
    }

    #[test]
    fn fallback_matches_demo_wording() {
        assert!(FALLBACK_ANSWER.starts_with("Right now I'm a simple demo."));
        assert!(FALLBACK_ANSWER.ends_with("'When is wheat ready to harvest?' "));
    }
}
