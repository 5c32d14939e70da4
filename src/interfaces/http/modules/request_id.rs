//! Request ID middleware
//!
//! Reuses a caller-supplied `X-Request-Id` (up to 128 visible ASCII chars)
//! or mints a UUID v4. Downstream logs run inside a span tagged with it and
//! the response carries the same header.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

const HEADER: &str = "x-request-id";
const MAX_LEN: usize = 128;

fn incoming_id(request: &Request<Body>) -> Option<HeaderValue> {
    let value = request.headers().get(HEADER)?;
    let text = value.to_str().ok()?;
    let usable = !text.is_empty()
        && text.len() <= MAX_LEN
        && text.bytes().all(|b| b.is_ascii_graphic());
    usable.then(|| value.clone())
}

pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let id = incoming_id(&request).unwrap_or_else(|| {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("unavailable"))
    });

    let span = tracing::info_span!(
        "request",
        request_id = id.to_str().unwrap_or_default(),
        method = %request.method(),
        path = request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;
    response.headers_mut().insert(HEADER, id);
    response
}
