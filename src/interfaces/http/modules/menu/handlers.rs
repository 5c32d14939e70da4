//! Menu HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::application::services::{MenuListing, MenuService};
use crate::domain::DomainError;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::ApiError;

use super::dto::*;

#[derive(Clone)]
pub struct MenuState {
    pub service: Arc<MenuService>,
}

#[utoipa::path(
    post,
    path = "/api/get-menu",
    tag = "Menu",
    request_body = GetMenuRequest,
    responses(
        (status = 200, description = "Available menu items", body = MenuListing),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_menu(
    State(state): State<MenuState>,
    ValidatedJson(request): ValidatedJson<GetMenuRequest>,
) -> Result<Json<MenuListing>, ApiError> {
    state
        .service
        .list(request.into())
        .await
        .map(Json)
        .map_err(into_api_error)
}

fn into_api_error(err: DomainError) -> ApiError {
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    tracing::error!(error = %err, "Menu retrieval failed");
    ApiError::internal(json!({
        "error": "Failed to retrieve menu",
        "message": "Unable to fetch menu items at this time. Please try again.",
    }))
}
