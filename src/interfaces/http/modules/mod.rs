//! HTTP endpoint modules, one per API surface

pub mod allergens;
pub mod availability;
pub mod health;
pub mod menu;
pub mod metrics;
pub mod orders;
pub mod request_id;
pub mod reservations;
pub mod session;
