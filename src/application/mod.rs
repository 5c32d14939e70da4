//! Application layer: use-case services over the domain repositories.

pub mod cached;
pub mod services;
pub mod voice;

#[cfg(test)]
pub mod testing;

pub use services::{
    AllergenService, AvailabilityService, MenuService, OrderService, ReservationService,
};
pub use voice::{EphemeralSession, SessionRateLimiter, VoiceSessionProvider, VoiceSessionService};
