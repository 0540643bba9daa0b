mod config;
mod errors;
mod extractors;
mod llm_client;
mod matching;
mod profile;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmConfig};
use crate::profile::store::{InMemoryProfileStore, ProfileStore, RedisProfileStore};
use crate::resume::extractor::{ExtractorConfig, TextExtractor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillSync API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = TextExtractor::init(ExtractorConfig {
        max_upload_bytes: config.max_upload_bytes,
    });

    // Profile persistence
    let profiles: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisProfileStore::connect(url).await?),
        None => {
            warn!("REDIS_URL not set, profiles will be kept in memory only");
            Arc::new(InMemoryProfileStore::new())
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(LlmConfig {
        api_key: config.openai_api_key.clone(),
        api_url: config.openai_api_url.clone(),
        retry: config.llm_retry,
    })?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        profiles,
        llm,
        extractor,
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
