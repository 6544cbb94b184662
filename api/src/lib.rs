use std::env;
use std::sync::Arc;

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

pub use crate::core::app_state::AppState;
pub use error_handler::{AppError, AppResult};

use axum::http::Method;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::info;

use crate::middleware_layer::json_extractor::json_error_mapper;
use crate::routes::{ask::ask_question_route::ask_question, health::health_route::llm_health};

/// Starts the HTTP server: state from environment, bind `API_ADDRESS`
/// (default `0.0.0.0:8000`), graceful shutdown on Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!("listening on http://{host_url}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Build and return the full Axum router.
///
/// CORS admits the single configured browser origin with credentials.
/// Wildcard methods/headers cannot be combined with credentials, so the
/// method list is explicit and request headers are mirrored back.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.frontend_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/ask", post(ask_question))
        .route("/health", get(llm_health))
        .layer(middleware::from_fn(json_error_mapper))
        .layer(cors)
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
