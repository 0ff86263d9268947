//! Veritrail Web Server
//!
//! Run with: cargo run -p veritrail-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use veritrail_store::{AuditStore, MemoryAuditStore};
use veritrail_web::config::Config;
use veritrail_web::router::build_router;
use veritrail_web::seed::seed_demo_data;
use veritrail_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Veritrail audit server...");

    let config = Config::load()?;

    let store: Arc<dyn AuditStore> =
        Arc::new(MemoryAuditStore::with_windowing(config.metrics.windowing));

    if config.seed.demo_data {
        seed_demo_data(store.as_ref()).await?;
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = build_router(AppState::new(store, config));

    info!("Server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
