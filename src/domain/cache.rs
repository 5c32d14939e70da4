//! Read-through response cache interface
//!
//! Values are serialized response payloads. There is no invalidation API:
//! entries disappear only when their TTL runs out.

use std::time::Duration;

use async_trait::async_trait;

use super::DomainResult;

#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Fetch a live entry. Expired entries are reported as misses.
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> DomainResult<()>;
}

/// Key for an availability answer. Built from the raw request values so
/// that identical requests hit the same entry.
pub fn availability_key(date: &str, time: &str, party_size: i32) -> String {
    format!("availability:{}:{}:{}", date, time, party_size)
}

pub fn menu_key(category: Option<&str>, dietary_filter: Option<&str>) -> String {
    format!(
        "menu:{}:{}",
        category.unwrap_or("all"),
        dietary_filter.unwrap_or("none")
    )
}
