//! Realtime voice session proxy

pub mod provider;
pub mod rate_limiter;
pub mod service;
pub mod session_config;

pub use provider::{EphemeralSession, VoiceSessionProvider};
pub use rate_limiter::SessionRateLimiter;
pub use service::VoiceSessionService;
pub use session_config::session_config;
