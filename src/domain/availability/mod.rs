//! Table availability aggregate

pub mod model;
pub mod repository;

pub use model::{parse_date, parse_time, AvailabilitySlot, SlotKey};
pub use repository::AvailabilityRepository;
