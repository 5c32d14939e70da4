//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_menu_categories;
mod m20250101_000002_create_menu_items;
mod m20250101_000003_create_table_availability;
mod m20250101_000004_create_reservations;
mod m20250101_000005_create_orders;
mod m20250101_000006_create_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_menu_categories::Migration),
            Box::new(m20250101_000002_create_menu_items::Migration),
            Box::new(m20250101_000003_create_table_availability::Migration),
            Box::new(m20250101_000004_create_reservations::Migration),
            Box::new(m20250101_000005_create_orders::Migration),
            Box::new(m20250101_000006_create_order_items::Migration),
        ]
    }
}
