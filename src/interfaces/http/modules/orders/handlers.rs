//! Order HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::application::services::{OrderConfirmation, OrderService};
use crate::domain::DomainError;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::ApiError;

use super::dto::*;

#[derive(Clone)]
pub struct OrderState {
    pub service: Arc<OrderService>,
    pub restaurant_phone: String,
}

#[utoipa::path(
    post,
    path = "/api/create-order",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = OrderConfirmation),
        (status = 400, description = "Missing parameters, bad order type or missing delivery address"),
        (status = 500, description = "Order could not be stored")
    )
)]
pub async fn create_order(
    State(state): State<OrderState>,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> Result<Json<OrderConfirmation>, ApiError> {
    state
        .service
        .create(request.into())
        .await
        .map(Json)
        .map_err(|e| into_api_error(e, &state.restaurant_phone))
}

fn into_api_error(err: DomainError, phone: &str) -> ApiError {
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    tracing::error!(error = %err, "Order creation failed");
    let mut body = json!({
        "error": "Failed to create order",
        "message": format!(
            "Unable to complete your order at this time. Please try again or call us directly at {}.",
            phone
        ),
    });
    if err.is_retryable() {
        body["retryable"] = json!(true);
    }
    ApiError::internal(body)
}
