pub mod entities;
pub mod migrator;
pub mod repositories;
pub mod seed;

#[cfg(test)]
pub mod testing;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrator::Migrator;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./restaurant.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./restaurant.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.sqlx_logging(false);
    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Apply all pending migrations
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    info!("Running database migrations");
    Migrator::up(db, None).await?;
    info!("Migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::{menu_category, menu_item, table_availability};
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[test]
    fn sqlite_config_builds_url() {
        assert_eq!(
            DatabaseConfig::sqlite("/tmp/r.db").url,
            "sqlite:///tmp/r.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let db = testing::seeded_db().await;
        seed::seed_demo_data(&db, testing::seed_date(), 2).await.unwrap();

        assert_eq!(menu_category::Entity::find().count(&db).await.unwrap(), 6);
        assert_eq!(menu_item::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(
            table_availability::Entity::find().count(&db).await.unwrap(),
            2 * seed::SLOT_TIMES.len() as u64
        );
    }
}
