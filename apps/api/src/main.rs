mod config;
mod errors;
mod extraction;
mod feed;
mod matching;
mod models;
mod routes;
mod state;
mod vector;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feed::catalog::{demo_profile, StaticCatalog};
use crate::feed::rejections::RejectionStore;
use crate::feed::scorer::build_scorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pivot API v{}", env!("CARGO_PKG_VERSION"));

    // Job catalog: JSON file when CATALOG_PATH is set, built-in otherwise
    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::from_json_file(path)?,
        None => StaticCatalog::builtin(),
    };
    if catalog.is_empty() {
        tracing::warn!("Job catalog is empty; matches and feed will return nothing");
    }
    info!("Job catalog ready ({} jobs)", catalog.len());
    info!("Default temperature: {}", config.default_temperature);

    // Feed scorer (title heuristic by default; swap via SIMILARITY_SCORER)
    let viewer = demo_profile(config.default_temperature).vector;
    let scorer = build_scorer(config.similarity_scorer, viewer);
    info!("Similarity scorer: {}", scorer.name());

    let state = AppState {
        config: config.clone(),
        jobs: Arc::new(catalog),
        scorer,
        rejections: Arc::new(RejectionStore::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the mobile client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
