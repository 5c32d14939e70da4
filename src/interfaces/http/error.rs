//! HTTP error responses
//!
//! Every endpoint answers failures with a flat JSON object
//! `{error, message?, ...context}`. Caller mistakes share one mapping;
//! server-side failures are shaped per endpoint by the handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::domain::DomainError;

#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn internal(body: Value) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
    }

    pub fn missing_parameters(error: &str, required: &[&str]) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            json!({ "error": error, "required": required }),
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "error": "Method not allowed" }),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Responses for errors the caller can act on: bad input, unknown
    /// records and rate limits. Server-side failures return `None` and are
    /// left to the endpoint.
    pub fn for_caller(err: &DomainError) -> Option<Self> {
        match err {
            DomainError::InvalidInput { error, message } => Some(Self::new(
                StatusCode::BAD_REQUEST,
                json!({ "error": error, "message": message }),
            )),
            DomainError::NotFound { entity, value, .. } => Some(Self::new(
                StatusCode::NOT_FOUND,
                json!({
                    "error": format!("{} not found", entity),
                    "message": format!("Sorry, I couldn't find anything matching \"{}\".", value),
                }),
            )),
            DomainError::RateLimited(message) => Some(Self::new(
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": message }),
            )),
            DomainError::DuplicateResource { .. }
            | DomainError::ServiceUnavailable(_)
            | DomainError::Configuration(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Fallback for any non-POST method on an API route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
