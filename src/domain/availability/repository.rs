//! Availability repository interface

use async_trait::async_trait;

use super::model::{AvailabilitySlot, SlotKey};
use crate::domain::DomainResult;

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// A slot at `key` with at least one free table and a max party size of
    /// at least `party_size`.
    async fn find_open_slot(
        &self,
        key: SlotKey,
        party_size: i32,
    ) -> DomainResult<Option<AvailabilitySlot>>;

    /// Take one table from the slot, guarded by `available_tables > 0`.
    /// Returns `false` when no row was changed.
    async fn decrement(&self, key: SlotKey) -> DomainResult<bool>;

    /// Give one table back to the slot. Returns `false` when no row matched.
    async fn increment(&self, key: SlotKey) -> DomainResult<bool>;
}
