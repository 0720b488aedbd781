mod analysis;
mod config;
mod errors;
mod models;
mod routes;
mod session;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::session::{AnalysisOptions, SessionController};
use crate::state::AppState;
use crate::store::{KvStore, MemoryStore, RedisStore};

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

    info!("Starting PRP API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config)?;

    let options = AnalysisOptions {
        round_augmentation: config.round_augmentation,
        min_jd_chars: config.min_jd_chars,
    };
    info!(
        "Analysis options: round augmentation {:?}, min JD chars {}",
        options.round_augmentation, options.min_jd_chars
    );

    let state = AppState {
        config: config.clone(),
        session: Arc::new(SessionController::new(store, options)),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is configured, otherwise a process-local map.
fn build_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    match &config.redis_url {
        Some(url) => Ok(Arc::new(RedisStore::open(url, config.store_key_prefix.clone())?)),
        None => {
            info!("REDIS_URL not set; analyses are kept in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
