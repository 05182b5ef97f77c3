//! Event quote API server: /generate-quote, /get-quotes.

use quote_api::config::ServerConfig;
use quote_api::server::{self, AppState};
use quote_gen::LlmQuoteGenerator;
use quote_llm::{GenerationParams, OpenAiLlmClient, OpenAiLlmConfig};
use quote_store::InMemoryQuoteStore;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let llm = OpenAiLlmClient::new(OpenAiLlmConfig::from_env()?)?;
    if !llm.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; generation calls will return error records");
    }
    tracing::info!(model = llm.model(), "using chat-completion model");

    let generator = LlmQuoteGenerator::new(llm, GenerationParams::from_env()?);
    let state = Arc::new(AppState {
        generator: Arc::new(generator),
        store: Arc::new(InMemoryQuoteStore::new()),
        limits: config.limits,
    });

    let app = server::router(state);
    tracing::info!("Quote API listening on {}", config.listen);
    axum::serve(
        tokio::net::TcpListener::bind(config.listen).await?,
        app.into_make_service(),
    )
    .await?;
    Ok(())
}
