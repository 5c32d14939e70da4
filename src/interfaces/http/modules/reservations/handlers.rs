//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::application::services::{
    CancellationConfirmation, ReservationConfirmation, ReservationService,
};
use crate::domain::DomainError;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::ApiError;

use super::dto::*;

#[derive(Clone)]
pub struct ReservationState {
    pub service: Arc<ReservationService>,
    pub restaurant_phone: String,
}

#[utoipa::path(
    post,
    path = "/api/create-reservation",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Reservation confirmed", body = ReservationConfirmation),
        (status = 400, description = "Missing or invalid parameters"),
        (status = 500, description = "Reservation could not be stored; `retryable` is set on code conflicts")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<Json<ReservationConfirmation>, ApiError> {
    state
        .service
        .create(request.into())
        .await
        .map(Json)
        .map_err(|e| create_error(e, &state.restaurant_phone))
}

#[utoipa::path(
    post,
    path = "/api/cancel-reservation",
    tag = "Reservations",
    request_body = CancelReservationRequest,
    responses(
        (status = 200, description = "Reservation cancelled", body = CancellationConfirmation),
        (status = 400, description = "Missing parameters or already cancelled"),
        (status = 404, description = "No reservation with that code and phone number"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationState>,
    ValidatedJson(request): ValidatedJson<CancelReservationRequest>,
) -> Result<Json<CancellationConfirmation>, ApiError> {
    state
        .service
        .cancel(request.into())
        .await
        .map(Json)
        .map_err(|e| cancel_error(e, &state.restaurant_phone))
}

fn create_error(err: DomainError, phone: &str) -> ApiError {
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    if err.is_retryable() {
        tracing::warn!(error = %err, "Confirmation code conflict");
        return ApiError::internal(json!({
            "error": "Failed to create reservation",
            "message": "Please try again - confirmation code conflict",
            "retryable": true,
        }));
    }
    tracing::error!(error = %err, "Reservation creation failed");
    ApiError::internal(json!({
        "error": "Failed to create reservation",
        "message": format!(
            "Unable to complete reservation at this time. Please try again or call us directly at {}.",
            phone
        ),
    }))
}

fn cancel_error(err: DomainError, phone: &str) -> ApiError {
    if let DomainError::NotFound { value, .. } = &err {
        return ApiError::new(
            StatusCode::NOT_FOUND,
            json!({
                "error": "Reservation not found",
                "confirmation_code": value,
                "message": format!(
                    "I couldn't find reservation {} for that phone number. Could you check the confirmation code?",
                    value
                ),
            }),
        );
    }
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    tracing::error!(error = %err, "Reservation cancellation failed");
    ApiError::internal(json!({
        "error": "Failed to cancel reservation",
        "message": format!(
            "Unable to cancel the reservation at this time. Please try again or call us directly at {}.",
            phone
        ),
    }))
}
