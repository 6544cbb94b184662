use ai_llm_service::telemetry;
use tracing::Level;
use tracing_subscriber::{Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file when present; deployments
    // may provide them through the process environment instead.
    dotenvy::dotenv().ok();

    // INFO globally, DEBUG for the LLM service crate (override via RUST_LOG).
    let filter = telemetry::env_filter_with_level("info", Level::DEBUG);
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(filter))
        .init();

    api::start().await?;

    Ok(())
}
