//! Job search over the in-memory corpus.

use std::time::{Duration, Instant};

use common::{
    job_result::JobResult,
    search_const::PAGE_SIZE,
    search_query::SearchRequest,
    search_result::{AppliedFilters, Pagination, SearchInfo, SearchResponse},
};

use crate::api::search::{search_facets::compute_facets, search_filter::build_job_filter};

/// Run `request` against `corpus`.
///
/// Matching jobs keep their corpus order and are sliced to the requested
/// page. Facets always describe the whole corpus, whatever the filters or the
/// `include_facets` flag say. Expects `request.page >= 1`.
pub fn search_jobs(corpus: &[JobResult], request: &SearchRequest) -> SearchResponse {
    let t0 = Instant::now();

    let filter = build_job_filter(request);
    let matching_jobs = corpus.iter().filter(|job| filter.matches(job)).collect::<Vec<_>>();

    let pagination = Pagination::new(request.page, PAGE_SIZE, matching_jobs.len() as u64);
    let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    let results = matching_jobs
        .into_iter()
        .skip(offset)
        .take(PAGE_SIZE as usize)
        .cloned()
        .collect::<Vec<_>>();

    let execution_time_ms = t0.elapsed().as_millis() as u64;
    tracing::debug!(
        "search {:?}: {} of {} jobs matched in {}ms",
        request.search_term,
        pagination.total_results,
        corpus.len(),
        execution_time_ms,
    );

    SearchResponse {
        results,
        pagination,
        search_info: SearchInfo {
            execution_time_ms,
            search_term: request.search_term.clone(),
            applied_filters: AppliedFilters::from_request(request),
        },
        facets: compute_facets(corpus),
    }
}

/// [`search_jobs`] preceded by a simulated backend delay. The delay is not
/// part of `execution_time_ms`.
pub async fn search_jobs_with_latency(corpus: &[JobResult], request: &SearchRequest, delay: Duration) -> SearchResponse {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    search_jobs(corpus, request)
}
