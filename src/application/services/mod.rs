//! Application services, one per voice-assistant operation.

pub mod allergen;
pub mod availability;
pub mod menu;
pub mod order;
pub mod reservation;

pub use allergen::{AllergenQuery, AllergenReport, AllergenService};
pub use availability::{AvailabilityAnswer, AvailabilityQuery, AvailabilityService};
pub use menu::{MenuEntry, MenuListing, MenuQuery, MenuService};
pub use order::{CreateOrder, OrderConfirmation, OrderService, RequestedItem};
pub use reservation::{
    CancelReservation, CancellationConfirmation, CreateReservation, ReservationConfirmation,
    ReservationService,
};
