//! Availability HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::application::services::{AvailabilityAnswer, AvailabilityService};
use crate::domain::DomainError;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::ApiError;

use super::dto::*;

#[derive(Clone)]
pub struct AvailabilityState {
    pub service: Arc<AvailabilityService>,
}

#[utoipa::path(
    post,
    path = "/api/check-availability",
    tag = "Reservations",
    request_body = CheckAvailabilityRequest,
    responses(
        (status = 200, description = "Availability for the requested slot", body = AvailabilityAnswer),
        (status = 400, description = "Missing or invalid parameters"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn check_availability(
    State(state): State<AvailabilityState>,
    ValidatedJson(request): ValidatedJson<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityAnswer>, ApiError> {
    state
        .service
        .check(request.into())
        .await
        .map(Json)
        .map_err(into_api_error)
}

fn into_api_error(err: DomainError) -> ApiError {
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    tracing::error!(error = %err, "Availability check failed");
    ApiError::internal(json!({
        "error": "Failed to check availability",
        "available": false,
        "message": "Unable to check availability at this time. Please try again.",
    }))
}
