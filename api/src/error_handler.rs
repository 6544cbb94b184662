use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use ai_llm_service::AiLlmError;
use ai_llm_service::error_handler::{ProviderError, ProviderErrorKind};
use responder::ResponderError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Llm(#[from] AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::InvalidEnv { .. } | AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidEnv { .. } => "INVALID_ENV",
            AppError::Llm(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert `ResponderError` to `AppError::Http` with precise HTTP status &
/// code. Upstream failures surface as 502; a broken config as 500.
impl From<ResponderError> for AppError {
    fn from(err: ResponderError) -> Self {
        match err {
            ResponderError::EmptyAnswer => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "LLM_EMPTY_ANSWER",
                message: "The language model returned an empty answer.".into(),
            },
            ResponderError::Backend(e) => match e {
                AiLlmError::HttpTransport(inner) => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "LLM_UNREACHABLE",
                    message: format!("Could not reach the language model backend: {inner}"),
                },
                AiLlmError::Provider(ProviderError {
                    kind: ProviderErrorKind::HttpStatus(h),
                    ..
                }) => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "LLM_UPSTREAM",
                    message: format!("Language model backend failed: {h}"),
                },
                AiLlmError::Provider(p) => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "LLM_BAD_RESPONSE",
                    message: p.to_string(),
                },
                AiLlmError::Config(c) => AppError::Http {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "CONFIG_ERROR",
                    message: c.to_string(),
                },
                other => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "LLM_UPSTREAM",
                    message: other.to_string(),
                },
            },
        }
    }
}
