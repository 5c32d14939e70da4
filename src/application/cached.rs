//! Read-through caching for query results

use std::future::Future;
use std::time::Duration;

use metrics::counter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{DomainResult, ResponseCache};

fn cache_name(key: &str) -> String {
    key.split(':').next().unwrap_or(key).to_string()
}

/// Return the cached value for `key`, or run `load`, store its result for
/// `ttl` and return it.
///
/// Cache failures never fail the request: unreadable entries and backend
/// errors count as misses, and a failed write is only logged. Errors from
/// `load` are returned as-is and nothing is cached.
pub async fn read_through<T, F, Fut>(
    cache: &dyn ResponseCache,
    key: &str,
    ttl: Duration,
    load: F,
) -> DomainResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                debug!(key, "Cache hit");
                counter!("cache_hits_total", "cache" => cache_name(key)).increment(1);
                return Ok(value);
            }
            Err(e) => warn!(key, error = %e, "Discarding unreadable cache entry"),
        },
        Ok(None) => {}
        Err(e) => warn!(key, error = %e, "Cache read failed"),
    }
    counter!("cache_misses_total", "cache" => cache_name(key)).increment(1);

    let value = load().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set(key, raw, ttl).await {
                warn!(key, error = %e, "Cache write failed");
            }
        }
        Err(e) => warn!(key, error = %e, "Could not serialize value for cache"),
    }
    Ok(value)
}
