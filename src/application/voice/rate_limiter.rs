//! Per-address session rate limiting
//!
//! Fixed windows keyed by caller address. State is process-local and lost
//! on restart; instances behind a load balancer each count separately.

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use crate::domain::{DomainError, DomainResult};

pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started: Instant,
}

pub struct SessionRateLimiter {
    windows: DashMap<String, Window>,
    max_per_window: u32,
    window: Duration,
}

impl SessionRateLimiter {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_per_window,
            window,
        }
    }

    /// Count one session for `caller`, or fail with `RateLimited` when the
    /// caller already used up the current window. A window older than the
    /// configured length starts over. Expired windows of other callers are
    /// swept afterwards.
    pub fn acquire(&self, caller: &str) -> DomainResult<()> {
        let now = Instant::now();
        let outcome = {
            let mut entry = self.windows.entry(caller.to_string()).or_insert(Window {
                count: 0,
                started: now,
            });
            if now.duration_since(entry.started) >= self.window {
                *entry = Window {
                    count: 0,
                    started: now,
                };
            }
            if entry.count >= self.max_per_window {
                Err(DomainError::RateLimited(RATE_LIMITED_MESSAGE.to_string()))
            } else {
                entry.count += 1;
                Ok(())
            }
        };
        self.sweep(now);
        outcome
    }

    fn sweep(&self, now: Instant) {
        self.windows
            .retain(|_, w| now.duration_since(w.started) < self.window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn cap_applies_per_address() {
        let limiter = SessionRateLimiter::new(3, Duration::from_secs(3600));
        for _ in 0..3 {
            limiter.acquire("10.0.0.1").unwrap();
        }
        let err = limiter.acquire("10.0.0.1").unwrap_err();
        assert!(matches!(err, DomainError::RateLimited(ref m) if m == RATE_LIMITED_MESSAGE));

        limiter.acquire("10.0.0.2").unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn window_restarts_after_it_elapses() {
        let limiter = SessionRateLimiter::new(2, Duration::from_secs(3600));
        limiter.acquire("10.0.0.1").unwrap();
        limiter.acquire("10.0.0.1").unwrap();
        assert!(limiter.acquire("10.0.0.1").is_err());

        tokio::time::advance(Duration::from_secs(3599)).await;
        assert!(limiter.acquire("10.0.0.1").is_err());

        tokio::time::advance(Duration::from_secs(1)).await;
        limiter.acquire("10.0.0.1").unwrap();
        limiter.acquire("10.0.0.1").unwrap();
        assert!(limiter.acquire("10.0.0.1").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn expired_windows_are_swept() {
        let limiter = SessionRateLimiter::new(10, Duration::from_secs(60));
        limiter.acquire("a").unwrap();
        limiter.acquire("b").unwrap();
        assert_eq!(limiter.windows.len(), 2);

        tokio::time::advance(Duration::from_secs(61)).await;
        limiter.acquire("c").unwrap();
        assert_eq!(limiter.windows.len(), 1);
    }
}
