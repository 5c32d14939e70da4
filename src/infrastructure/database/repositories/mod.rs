//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod availability_repository;
pub mod menu_repository;
pub mod order_repository;
pub mod repository_provider;
pub mod reservation_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;
use crate::shared::errors::InfraError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    InfraError::Database(e).into()
}

/// Unique index violations on insert mean a generated code collided.
pub(crate) fn insert_err(e: DbErr, entity: &'static str, value: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateResource {
            entity,
            value: value.to_string(),
        },
        _ => db_err(e),
    }
}

/// JSON text column holding a string array. Malformed data reads as empty.
pub(crate) fn json_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_list_tolerates_bad_data() {
        assert_eq!(json_list(r#"["gluten","dairy"]"#), vec!["gluten", "dairy"]);
        assert!(json_list("").is_empty());
        assert!(json_list("gluten").is_empty());
    }
}
