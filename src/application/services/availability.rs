//! Table availability checks

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::cached::read_through;
use crate::domain::cache::availability_key;
use crate::domain::{DomainError, DomainResult, RepositoryProvider, ResponseCache, SlotKey};

#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub party_size: i32,
}

/// Answer to an availability check, cached as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityAnswer {
    pub available: bool,
    pub date: String,
    pub time: String,
    pub party_size: i32,
    pub message: String,
    /// Free tables at the slot, present only when `available`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables_available: Option<i32>,
}

pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, cache: Arc<dyn ResponseCache>, ttl: Duration) -> Self {
        Self { repos, cache, ttl }
    }

    /// Whether a party of `party_size` can be seated at the given slot.
    ///
    /// Answers are cached per date/time/party size for the configured TTL
    /// and are not refreshed when reservations change the slot.
    pub async fn check(&self, query: AvailabilityQuery) -> DomainResult<AvailabilityAnswer> {
        let slot = parse_slot(&query.date, &query.time)?;
        if query.party_size < 1 {
            return Err(DomainError::invalid(
                "Invalid party_size",
                "Party size must be at least 1 guest.",
            ));
        }

        let key = availability_key(&query.date, &query.time, query.party_size);
        let repos = &self.repos;
        let query = &query;
        read_through(self.cache.as_ref(), &key, self.ttl, || async move {
            let open = repos
                .availability()
                .find_open_slot(slot, query.party_size)
                .await?;
            info!(
                date = %query.date,
                time = %query.time,
                party_size = query.party_size,
                available = open.is_some(),
                "Availability checked"
            );
            Ok(answer(query, open.map(|s| s.available_tables)))
        })
        .await
    }
}

pub(crate) fn parse_slot(date: &str, time: &str) -> DomainResult<SlotKey> {
    SlotKey::parse(date, time).ok_or_else(|| {
        DomainError::invalid(
            "Invalid date or time",
            "Please give the date as YYYY-MM-DD and the time as HH:MM.",
        )
    })
}

fn answer(query: &AvailabilityQuery, tables_available: Option<i32>) -> AvailabilityAnswer {
    let available = tables_available.is_some();
    let message = if available {
        format!(
            "Table available for {} guests on {} at {}",
            query.party_size, query.date, query.time
        )
    } else {
        format!(
            "Sorry, no tables available for {} guests at that time. Would you like to try a different time?",
            query.party_size
        )
    };
    AvailabilityAnswer {
        available,
        date: query.date.clone(),
        time: query.time.clone(),
        party_size: query.party_size,
        message,
        tables_available,
    }
}
