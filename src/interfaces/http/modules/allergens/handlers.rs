//! Allergen HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::application::services::{AllergenReport, AllergenService};
use crate::domain::DomainError;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::ApiError;

use super::dto::*;

#[derive(Clone)]
pub struct AllergenState {
    pub service: Arc<AllergenService>,
    pub restaurant_phone: String,
}

#[utoipa::path(
    post,
    path = "/api/check-allergens",
    tag = "Menu",
    request_body = CheckAllergensRequest,
    responses(
        (status = 200, description = "Allergen report for the item", body = AllergenReport),
        (status = 400, description = "Missing or invalid parameters"),
        (status = 404, description = "Item not on the menu"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn check_allergens(
    State(state): State<AllergenState>,
    ValidatedJson(request): ValidatedJson<CheckAllergensRequest>,
) -> Result<Json<AllergenReport>, ApiError> {
    state
        .service
        .check(request.into())
        .await
        .map(Json)
        .map_err(|e| into_api_error(e, &state.restaurant_phone))
}

fn into_api_error(err: DomainError, phone: &str) -> ApiError {
    if let DomainError::NotFound { value, .. } = &err {
        return ApiError::new(
            StatusCode::NOT_FOUND,
            json!({
                "error": "Menu item not found",
                "item_name": value,
                "message": format!(
                    "Sorry, I couldn't find \"{}\" on our menu. Could you try a different item?",
                    value
                ),
            }),
        );
    }
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    tracing::error!(error = %err, "Allergen check failed");
    ApiError::internal(json!({
        "error": "Failed to check allergens",
        "message": format!(
            "Unable to verify allergen information at this time. For your safety, please call us directly at {}.",
            phone
        ),
    }))
}
