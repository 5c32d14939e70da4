//! Service fixtures shared by tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use super::voice::{EphemeralSession, VoiceSessionProvider};
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::shared::errors::InfraError;

/// First seeded day, see `infrastructure::database::testing::seed_date`.
pub const DAY: &str = "2030-06-01";

pub fn repos(db: &DatabaseConnection) -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(db.clone()))
}

/// Provider double that records calls and replays a canned outcome.
pub struct FakeProvider {
    pub calls: AtomicUsize,
    pub last_key: Mutex<Option<String>>,
    pub fail_with: Option<u16>,
}

impl FakeProvider {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_key: Mutex::new(None),
            fail_with: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl VoiceSessionProvider for FakeProvider {
    async fn create_session(
        &self,
        api_key: &str,
        _config: &Value,
    ) -> Result<EphemeralSession, InfraError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_key.lock().unwrap() = Some(api_key.to_string());
        match self.fail_with {
            Some(status) => Err(InfraError::Provider {
                status,
                body: "{\"error\":\"nope\"}".into(),
            }),
            None => Ok(EphemeralSession {
                client_secret: format!("ek_{n}"),
                session_id: format!("sess_{n}"),
                expires_at: 1_900_000_000,
            }),
        }
    }
}
