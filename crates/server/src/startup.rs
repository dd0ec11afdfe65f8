use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::EntityStore;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already-connected store.
pub fn build_app(store: Arc<EntityStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}

/// Public entry: connect and migrate, then serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    let store = Arc::new(EntityStore::new(db, cfg.storage.delete_policy));
    let app = build_app(store);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, delete_policy = %cfg.storage.delete_policy, "starting stock manager");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
