//! In-memory database fixtures shared by tests

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter};
use sea_orm_migration::MigratorTrait;

use super::entities::{reservation, table_availability};
use super::migrator::Migrator;
use super::seed::seed_demo_data;
use crate::domain::SlotKey;

pub fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
}

/// Migrated, unseeded in-memory SQLite. One pooled connection so every
/// query sees the same database.
pub async fn empty_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Migrated database with the demo menu and two days of slots from
/// [`seed_date`].
pub async fn seeded_db() -> DatabaseConnection {
    let db = empty_db().await;
    seed_demo_data(&db, seed_date(), 2).await.unwrap();
    db
}

pub fn slot(time: &str) -> SlotKey {
    SlotKey::parse("2030-06-01", time).unwrap()
}

pub async fn set_available_tables(db: &DatabaseConnection, key: SlotKey, tables: i32) {
    table_availability::Entity::update_many()
        .col_expr(table_availability::Column::AvailableTables, Expr::value(tables))
        .filter(table_availability::Column::Date.eq(key.date))
        .filter(table_availability::Column::TimeSlot.eq(key.time))
        .exec(db)
        .await
        .unwrap();
}

pub async fn available_tables(db: &DatabaseConnection, key: SlotKey) -> i32 {
    table_availability::Entity::find()
        .filter(table_availability::Column::Date.eq(key.date))
        .filter(table_availability::Column::TimeSlot.eq(key.time))
        .one(db)
        .await
        .unwrap()
        .map(|m| m.available_tables)
        .unwrap()
}

pub async fn set_reservation_status(db: &DatabaseConnection, code: &str, status: &str) {
    reservation::Entity::update_many()
        .col_expr(reservation::Column::Status, Expr::value(status))
        .filter(reservation::Column::ConfirmationCode.eq(code))
        .exec(db)
        .await
        .unwrap();
}
