use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log method, path, status and latency of every request.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let t0 = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = t0.elapsed().as_millis();
    if status.is_server_error() {
        tracing::error!("{} {} -> {} ({}ms)", method, path, status, elapsed_ms);
    } else {
        tracing::info!("{} {} -> {} ({}ms)", method, path, status, elapsed_ms);
    }
    response
}
