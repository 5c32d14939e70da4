//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::availability::AvailabilityRepository;
use crate::domain::menu::MenuRepository;
use crate::domain::order::OrderRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;

use super::availability_repository::SeaOrmAvailabilityRepository;
use super::menu_repository::SeaOrmMenuRepository;
use super::order_repository::SeaOrmOrderRepository;
use super::reservation_repository::SeaOrmReservationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let item = repos.menu().find_available_by_name("kinnie").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    menu: SeaOrmMenuRepository,
    availability: SeaOrmAvailabilityRepository,
    reservations: SeaOrmReservationRepository,
    orders: SeaOrmOrderRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            menu: SeaOrmMenuRepository::new(db.clone()),
            availability: SeaOrmAvailabilityRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            orders: SeaOrmOrderRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn menu(&self) -> &dyn MenuRepository {
        &self.menu
    }

    fn availability(&self) -> &dyn AvailabilityRepository {
        &self.availability
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }
}
