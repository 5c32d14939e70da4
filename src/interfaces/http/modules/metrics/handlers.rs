//! `GET /metrics`
//!
//! Series emitted by this service:
//! - `http_requests_total`, `http_request_duration_seconds` (see middleware)
//! - `cache_hits_total{cache}`, `cache_misses_total{cache}` for the
//!   availability and menu read-through caches
//! - `voice_sessions_rate_limited_total` for `/api/session` rejections

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

pub async fn prometheus_metrics(State(state): State<MetricsState>) -> Response {
    let mut response = state.handle.render().into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROMETHEUS_TEXT));
    response
}
