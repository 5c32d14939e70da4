//! Realtime voice provider port

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::InfraError;

/// Short-lived client credential relayed to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EphemeralSession {
    pub client_secret: String,
    pub session_id: String,
    /// Unix timestamp (seconds) after which `client_secret` stops working
    pub expires_at: i64,
}

#[async_trait]
pub trait VoiceSessionProvider: Send + Sync {
    /// Create a realtime session configured with `config`, authenticating
    /// with the server-held `api_key`.
    async fn create_session(
        &self,
        api_key: &str,
        config: &serde_json::Value,
    ) -> Result<EphemeralSession, InfraError>;
}
