mod config;
mod errors;
mod llm_client;
mod reviews;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::reviews::writer::{AssistedReviewWriter, LocalReviewWriter, ReviewWriter};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ASAP review API v{}", env!("CARGO_PKG_VERSION"));

    let writer = build_writer(&config)?;
    info!("Review writer: {}", writer.backend());

    if config.google_place_id.is_none() {
        warn!("GOOGLE_PLACE_ID not set; responses will carry no review link");
    }

    let state = AppState {
        config: config.clone(),
        writer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// AI-assisted writer when a key is configured, local assembler otherwise.
fn build_writer(config: &Config) -> Result<Arc<dyn ReviewWriter>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; all reviews come from the local assembler");
        return Ok(Arc::new(LocalReviewWriter));
    };

    let llm = match config.anthropic_api_url.clone() {
        Some(endpoint) => LlmClient::with_endpoint(api_key, endpoint)?,
        None => LlmClient::new(api_key)?,
    };
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    Ok(Arc::new(AssistedReviewWriter(llm)))
}
