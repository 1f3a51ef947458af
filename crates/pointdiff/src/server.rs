//! HTTP surface: one page at `/`, rebuilt on every request.

use crate::{AppError, AppResult, RankingPipeline};
use axum::{extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state of the dashboard server
#[derive(Clone)]
pub struct AppState {
    /// Pipeline rerun for each page view
    pub pipeline: Arc<RankingPipeline>,
}

impl AppState {
    /// Wraps a pipeline for sharing between requests.
    pub fn new(pipeline: RankingPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Create the dashboard router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rerun the pipeline and return the page
async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    let pipeline = Arc::clone(&state.pipeline);
    let page = tokio::task::spawn_blocking(move || pipeline.render_dashboard()).await??;
    Ok(Html(page))
}

/// Parse the configured bind address.
pub fn bind_address(address: &str) -> AppResult<SocketAddr> {
    address.parse().map_err(|source| AppError::Address {
        address: address.to_string(),
        source,
    })
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(state: AppState) -> AppResult<()> {
    let addr = bind_address(&state.pipeline.config().dashboard.bind_address)?;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "Dashboard listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
