//! HTTP layer hosting the search service.

use std::time::Duration;

use anyhow::Context;
use axum::{Router, routing::{get, post}};

use crate::{config::BackendConfig, corpus::JobCorpus};

mod api_error;
pub use api_error::ApiError;

mod health;
mod job_endpoint;
mod request_log;
mod search_endpoint;


#[derive(Debug, Clone)]
pub struct AppState {
    pub corpus: JobCorpus,
    pub search_delay: Duration,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", post(search_endpoint::search_jobs_endpoint))
        .route("/api/facets", get(search_endpoint::facets_endpoint))
        .route("/api/jobs/{id}", get(job_endpoint::get_job_endpoint))
        .route("/health", get(health::health_check))
        .layer(axum::middleware::from_fn(request_log::log_request))
        .with_state(state)
}

pub async fn serve(config: BackendConfig, corpus: JobCorpus) -> anyhow::Result<()> {
    let state = AppState { corpus, search_delay: config.search_delay };
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await.context("HTTP server stopped")
}
