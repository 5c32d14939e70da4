//! OpenAI Realtime sessions over REST

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::application::voice::{EphemeralSession, VoiceSessionProvider};
use crate::shared::errors::InfraError;

#[derive(Debug, Deserialize)]
struct ClientSecret {
    value: String,
    expires_at: i64,
}

/// The fields we relay; the rest of the provider response is dropped.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    client_secret: ClientSecret,
}

impl From<SessionResponse> for EphemeralSession {
    fn from(resp: SessionResponse) -> Self {
        Self {
            client_secret: resp.client_secret.value,
            session_id: resp.id,
            expires_at: resp.client_secret.expires_at,
        }
    }
}

pub struct OpenAiRealtimeClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiRealtimeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InfraError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn sessions_url(&self) -> String {
        format!("{}/realtime/sessions", self.base_url)
    }
}

#[async_trait]
impl VoiceSessionProvider for OpenAiRealtimeClient {
    async fn create_session(
        &self,
        api_key: &str,
        config: &Value,
    ) -> Result<EphemeralSession, InfraError> {
        let url = self.sessions_url();
        debug!("Requesting realtime session from {}", url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(config)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InfraError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let session: SessionResponse = serde_json::from_str(&body)?;
        Ok(session.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relays_only_secret_id_and_expiry() {
        let raw = r#"{
            "id": "sess_001",
            "object": "realtime.session",
            "model": "gpt-4o-realtime-preview-2024-12-17",
            "client_secret": { "value": "ek_abc", "expires_at": 1734626400 },
            "tools": []
        }"#;
        let session: EphemeralSession = serde_json::from_str::<SessionResponse>(raw).unwrap().into();
        assert_eq!(
            session,
            EphemeralSession {
                client_secret: "ek_abc".into(),
                session_id: "sess_001".into(),
                expires_at: 1734626400,
            }
        );
    }

    #[test]
    fn missing_client_secret_is_an_error() {
        let raw = r#"{ "id": "sess_001" }"#;
        assert!(serde_json::from_str::<SessionResponse>(raw).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = OpenAiRealtimeClient::new("https://api.openai.com/v1/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.sessions_url(), "https://api.openai.com/v1/realtime/sessions");
    }

    #[tokio::test]
    async fn unreachable_provider_is_an_http_error() {
        let client = OpenAiRealtimeClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client
            .create_session("sk-test", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, InfraError::Http(_)));
    }
}
