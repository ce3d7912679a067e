mod candidates;
mod config;
mod errors;
mod models;
mod routes;
mod screening;
mod state;
mod storage;
mod vocabulary;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{CvArchive, S3CvArchive};
use crate::vocabulary::store::{MemoryVocabularyStore, RedisVocabularyStore, VocabularyStore};

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

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Vocabulary store: Redis when configured, process memory otherwise
    let vocabulary: Arc<dyn VocabularyStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).context("Invalid REDIS_URL")?;
            info!("Redis vocabulary store initialized");
            Arc::new(RedisVocabularyStore::new(client))
        }
        None => {
            warn!("REDIS_URL not set; custom vocabulary will not survive restarts");
            Arc::new(MemoryVocabularyStore::new())
        }
    };

    // CV archive: S3 / MinIO when configured
    let archive: Option<Arc<dyn CvArchive>> = match &config.s3 {
        Some(settings) => {
            let archive: Arc<dyn CvArchive> = Arc::new(S3CvArchive::connect(settings).await);
            Some(archive)
        }
        None => {
            info!("S3 not configured; uploaded CVs will not be archived");
            None
        }
    };

    let state = AppState {
        candidates: CandidateStore::new(),
        vocabulary,
        archive,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the recruiter UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
