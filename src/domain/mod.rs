pub mod availability;
pub mod cache;
pub mod identifiers;
pub mod menu;
pub mod order;
pub mod repositories;
pub mod reservation;

// Re-export commonly used types
pub use availability::{AvailabilitySlot, SlotKey};
pub use cache::ResponseCache;
pub use menu::{MenuCategory, MenuFilter, MenuItem};
pub use order::{Order, OrderItem, OrderLine, OrderType, PricedLine};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Reservation, ReservationStatus};

pub use crate::shared::errors::DomainError;
