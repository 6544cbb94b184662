//! GET /health — reachability of the configured LLM backend.

use std::sync::Arc;

use ai_llm_service::HealthStatus;
use axum::{Json, extract::State};

use crate::core::app_state::AppState;

/// Handler: GET /health
///
/// Always 200; probe failures are reported in-band with `ok: false`.
pub async fn llm_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.llm.health().await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ai_llm_service::{LlmModelConfig, LlmProvider, LlmService};
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::build_router;
    use crate::core::app_state::AppState;

    #[tokio::test]
    async fn health_is_always_200_with_in_band_status() {
        let cfg = LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3.1".into(),
            // Reserved TEST-NET-1 address; the probe fails fast and the
            // failure must be reported in-band.
            endpoint: "http://192.0.2.1:1".into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(1),
        };
        let llm = Arc::new(LlmService::new(cfg).unwrap());
        let origin = HeaderValue::from_static("http://localhost:5173");
        let app = build_router(Arc::new(AppState::new(llm, origin)));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["provider"], "Ollama");
        assert!(json["ok"].is_boolean());
        assert!(json["message"].is_string());
    }
}
