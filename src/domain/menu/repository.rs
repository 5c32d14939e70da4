//! Menu repository interface

use async_trait::async_trait;

use super::model::{MenuFilter, MenuItem};
use crate::domain::DomainResult;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Available items matching `filter`, ordered by category display order,
    /// popularity (desc) and name.
    async fn list_available(&self, filter: &MenuFilter) -> DomainResult<Vec<MenuItem>>;

    /// Available item whose name equals `name` ignoring case.
    async fn find_available_by_name(&self, name: &str) -> DomainResult<Option<MenuItem>>;
}
