//! Per-request HTTP metrics

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use tokio::time::Instant;

/// Label for requests that matched no route (the `public/` file fallback).
const STATIC_ROUTE: &str = "static";

fn route_label(request: &Request<Body>) -> String {
    match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => STATIC_ROUTE.to_owned(),
    }
}

/// Counts every request in `http_requests_total{method,path,status}` and
/// times it in `http_request_duration_seconds{method,path}`. `path` is the
/// route template, so `/api/create-order` never fans out per caller.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().as_str().to_owned();
    let path = route_label(&request);
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed = started.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    histogram!("http_request_duration_seconds", "method" => method.clone(), "path" => path.clone())
        .record(elapsed);
    counter!("http_requests_total", "method" => method, "path" => path, "status" => status)
        .increment(1);

    response
}
