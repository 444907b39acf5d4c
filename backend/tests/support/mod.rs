//! Shared helpers for the HTTP tests: build the router over a corpus and
//! drive it in-process with `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use backend::{
    corpus::{JobCorpus, sample_jobs},
    server::{AppState, build_router},
};
use tower::ServiceExt;

pub fn test_app() -> Router {
    test_app_with(JobCorpus::new(sample_jobs().unwrap()))
}

pub fn test_app_with(corpus: JobCorpus) -> Router {
    build_router(AppState { corpus, search_delay: Duration::ZERO })
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
