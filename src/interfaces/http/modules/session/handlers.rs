//! Voice session HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::application::{EphemeralSession, VoiceSessionService};
use crate::domain::DomainError;
use crate::interfaces::http::common::ClientAddr;
use crate::interfaces::http::error::ApiError;

/// Returned instead of provider details, which only go to the server log.
pub const PROVIDER_FAILURE_DETAILS: &str = "The voice service is temporarily unavailable";

#[derive(Clone)]
pub struct SessionState {
    pub service: Arc<VoiceSessionService>,
}

/// Mint a short-lived client secret for the browser's realtime connection.
/// The request body is ignored.
#[utoipa::path(
    post,
    path = "/api/session",
    tag = "Voice",
    responses(
        (status = 200, description = "Ephemeral session credentials", body = EphemeralSession),
        (status = 429, description = "Too many sessions from this address"),
        (status = 500, description = "Server misconfigured or provider failure")
    )
)]
pub async fn create_session(
    State(state): State<SessionState>,
    ClientAddr(caller): ClientAddr,
) -> Result<Json<EphemeralSession>, ApiError> {
    state
        .service
        .create_session(&caller)
        .await
        .map(Json)
        .map_err(into_api_error)
}

fn into_api_error(err: DomainError) -> ApiError {
    if let Some(resp) = ApiError::for_caller(&err) {
        return resp;
    }
    match err {
        DomainError::Configuration(details) => ApiError::internal(json!({
            "error": "Server configuration error",
            "details": details,
        })),
        _ => ApiError::internal(json!({
            "error": "Failed to create session with provider",
            "details": PROVIDER_FAILURE_DETAILS,
        })),
    }
}
