//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` - unified access to all per-aggregate repositories
//! - `DomainResult` - standard result type for domain operations

use super::availability::AvailabilityRepository;
use super::menu::MenuRepository;
use super::order::OrderRepository;
use super::reservation::ReservationRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let item = repos.menu().find_available_by_name("pastizzi").await?;
///     let slot = repos.availability().find_open_slot(key, 4).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn menu(&self) -> &dyn MenuRepository;
    fn availability(&self) -> &dyn AvailabilityRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn orders(&self) -> &dyn OrderRepository;
}
