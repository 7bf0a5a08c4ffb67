mod config;
mod errors;
mod models;
mod ranking;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, RecordSource};
use crate::ranking::RankingEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryRecordStore, PgRecordStore, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing record source or bad weights)
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

    info!("Starting candidate ranker v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config.records).await?;

    let engine = RankingEngine::new(config.weights, config.personality_bound);
    info!(
        "Ranking weights: {:?}, personality bound: {:?}",
        engine.weights(),
        engine.personality_bound()
    );

    let state = AppState { store, engine };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(source: &RecordSource) -> Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match source {
        RecordSource::Postgres {
            database_url,
            max_connections,
        } => Arc::new(PgRecordStore::connect(database_url, *max_connections).await?),
        RecordSource::File(path) => Arc::new(MemoryRecordStore::from_file(path)?),
    };
    Ok(store)
}
