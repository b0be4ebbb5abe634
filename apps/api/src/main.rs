mod analysis;
mod assistant;
mod config;
mod errors;
mod llm_client;
mod models;
mod profile;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::drafter::{AnswerDrafter, GeminiDrafter};
use crate::config::Config;
use crate::llm_client::LlmClient;
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

    info!("Starting MoodFolio API v{}", env!("CARGO_PKG_VERSION"));

    // AI drafting is optional; everything else works without a key
    let drafter: Option<Arc<dyn AnswerDrafter>> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.gemini_model.clone())?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(GeminiDrafter(llm)))
        }
        None => {
            warn!("GEMINI_API_KEY not set; /api/v1/ai endpoints will return 503");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        drafter,
    };

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
