use std::str::FromStr;

use crate::error_handler::{AiLlmError, ConfigError};

/// Represents the provider (backend) used for LLM inference.
///
/// Adding more providers in the future (e.g., Anthropic Claude, Mistral API)
/// is done by extending this enum and the `FromStr` mapping below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
    /// OpenAI chat completions API.
    OpenAI,
}

impl FromStr for LlmProvider {
    type Err = AiLlmError;

    /// Parses the `LLM_KIND` value. `chatgpt` is accepted as a legacy alias
    /// for `openai`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" | "chatgpt" => Ok(Self::OpenAI),
            other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("ollama".parse::<LlmProvider>().unwrap(), LlmProvider::Ollama);
        assert_eq!("OpenAI".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
        assert_eq!("chatgpt".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!("bard".parse::<LlmProvider>().is_err());
    }
}
