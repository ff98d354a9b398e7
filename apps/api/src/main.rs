mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatBackend, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Analysis Gateway v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client; without a key the server still answers, with 500s
    let llm: Option<Arc<dyn ChatBackend>> = match &config.ai_gateway_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.ai_gateway_url.clone())?;
            info!(
                "LLM client initialized (model: {}, endpoint: {})",
                llm_client::MODEL,
                config.ai_gateway_url
            );
            Some(Arc::new(client))
        }
        None => {
            warn!("AI_GATEWAY_API_KEY is not set; analysis requests will fail");
            None
        }
    };

    let state = AppState { llm };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
