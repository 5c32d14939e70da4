//! Voice session minting

use std::sync::Arc;

use metrics::counter;
use serde_json::Value;
use tracing::{error, info, warn};

use super::provider::{EphemeralSession, VoiceSessionProvider};
use super::rate_limiter::SessionRateLimiter;
use crate::domain::{DomainError, DomainResult};
use crate::shared::errors::InfraError;

const API_KEY_PREFIX: &str = "sk-";

pub const MISCONFIGURED_KEY: &str = "API key not properly configured";
pub const REJECTED_KEY: &str = "Invalid API key";

pub struct VoiceSessionService {
    limiter: SessionRateLimiter,
    provider: Arc<dyn VoiceSessionProvider>,
    api_key: Option<String>,
    session_config: Value,
}

impl VoiceSessionService {
    pub fn new(
        limiter: SessionRateLimiter,
        provider: Arc<dyn VoiceSessionProvider>,
        api_key: Option<String>,
        session_config: Value,
    ) -> Self {
        Self {
            limiter,
            provider,
            api_key,
            session_config,
        }
    }

    /// Whether a usable provider credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| key.starts_with(API_KEY_PREFIX))
    }

    /// Mint an ephemeral session for `caller` (the client address).
    ///
    /// The rate limit is applied before anything else, so rejected
    /// credentials still count against the caller.
    pub async fn create_session(&self, caller: &str) -> DomainResult<EphemeralSession> {
        if let Err(e) = self.limiter.acquire(caller) {
            counter!("voice_sessions_rate_limited_total").increment(1);
            warn!(caller, "Voice session rate limited");
            return Err(e);
        }

        let Some(api_key) = self.api_key() else {
            error!("Provider API key missing or malformed");
            return Err(DomainError::Configuration(MISCONFIGURED_KEY.to_string()));
        };

        match self.provider.create_session(api_key, &self.session_config).await {
            Ok(session) => {
                info!(caller, session_id = %session.session_id, "Voice session created");
                Ok(session)
            }
            Err(InfraError::Provider { status: 401, body }) => {
                error!(body = %body, "Provider rejected API key");
                Err(DomainError::Configuration(REJECTED_KEY.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Failed to create voice session");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeProvider;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn service(provider: Arc<FakeProvider>, key: Option<&str>, max: u32) -> VoiceSessionService {
        VoiceSessionService::new(
            SessionRateLimiter::new(max, Duration::from_secs(3600)),
            provider,
            key.map(String::from),
            serde_json::json!({"model": "test"}),
        )
    }

    #[tokio::test]
    async fn relays_provider_session() {
        let provider = Arc::new(FakeProvider::ok());
        let svc = service(provider.clone(), Some("sk-test"), 10);

        let session = svc.create_session("10.0.0.1").await.unwrap();
        assert_eq!(session.client_secret, "ek_0");
        assert_eq!(session.session_id, "sess_0");
        assert_eq!(provider.last_key.lock().unwrap().as_deref(), Some("sk-test"));
    }

    #[tokio::test]
    async fn malformed_key_is_configuration_error() {
        let provider = Arc::new(FakeProvider::ok());
        for key in [None, Some("pk-live-123"), Some("")] {
            let svc = service(provider.clone(), key, 10);
            assert!(!svc.is_configured());
            let err = svc.create_session("10.0.0.1").await.unwrap_err();
            assert!(matches!(err, DomainError::Configuration(ref m) if m == MISCONFIGURED_KEY));
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rate_limit_comes_before_provider() {
        let provider = Arc::new(FakeProvider::ok());
        let svc = service(provider.clone(), Some("sk-test"), 2);

        svc.create_session("10.0.0.1").await.unwrap();
        svc.create_session("10.0.0.1").await.unwrap();
        let err = svc.create_session("10.0.0.1").await.unwrap_err();
        assert!(matches!(err, DomainError::RateLimited(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn provider_failures_are_mapped() {
        let svc = service(Arc::new(FakeProvider::failing(401)), Some("sk-revoked"), 10);
        let err = svc.create_session("10.0.0.1").await.unwrap_err();
        assert!(matches!(err, DomainError::Configuration(ref m) if m == REJECTED_KEY));

        let svc = service(Arc::new(FakeProvider::failing(503)), Some("sk-test"), 10);
        let err = svc.create_session("10.0.0.1").await.unwrap_err();
        assert!(matches!(err, DomainError::ServiceUnavailable(_)));
    }
}
