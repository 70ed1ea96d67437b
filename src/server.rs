use anyhow::{Context, Result};
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;

use crate::{charts::routes::create_charts_router, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new().merge(create_charts_router()).with_state(state)
}

pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!("Dashboard listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated")?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
