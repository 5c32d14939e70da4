//! Reservation repository interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation, ReservationStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation with status `confirmed`.
    ///
    /// A confirmation code that already exists fails with
    /// `DomainError::DuplicateResource`.
    async fn create(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Find reservation by confirmation code
    async fn find_by_confirmation_code(&self, code: &str) -> DomainResult<Option<Reservation>>;

    /// Set the status of a reservation
    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()>;
}
