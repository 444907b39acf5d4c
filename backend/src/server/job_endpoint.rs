use axum::{Json, extract::{Path, State}};
use common::job_result::JobResult;

use super::{ApiError, AppState};

pub async fn get_job_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobResult>, ApiError> {
    state
        .corpus
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no job with id {id}")))
}
