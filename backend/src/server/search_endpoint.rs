//! Search and facet endpoints.

use axum::{Json, extract::{State, rejection::JsonRejection}};
use common::{search_query::SearchRequest, search_result::{Facets, SearchResponse}};

use crate::api::search::{compute_facets, search_jobs_with_latency};
use super::{ApiError, AppState};

pub async fn search_jobs_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    if request.page < 1 {
        return Err(ApiError::BadRequest(format!("page must be at least 1, got {}", request.page)));
    }

    let response = search_jobs_with_latency(state.corpus.jobs(), &request, state.search_delay).await;
    tracing::info!(
        "search term={:?} filters={} -> {} results, page {}/{}",
        request.search_term,
        request.has_filters(),
        response.pagination.total_results,
        response.pagination.current_page,
        response.pagination.total_pages,
    );
    Ok(Json(response))
}

pub async fn facets_endpoint(State(state): State<AppState>) -> Json<Facets> {
    Json(compute_facets(state.corpus.jobs()))
}
