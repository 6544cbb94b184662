//! POST /ask — answers a harvest-readiness question.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask
///
/// Routes the question through the responder: keyword hit → delegated LLM
/// answer, otherwise the fixed fallback.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"When is wheat ready to harvest?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let answer = responder::respond(state.backend.as_ref(), &body.question).await?;
    Ok(Json(AskResponse { answer }))
}
