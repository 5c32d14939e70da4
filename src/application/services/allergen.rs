//! Allergen checks for a single menu item

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{DomainError, DomainResult, MenuItem, RepositoryProvider};

#[derive(Debug, Clone)]
pub struct AllergenQuery {
    pub item_name: String,
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllergenReport {
    /// Name as stored on the menu
    pub item_name: String,
    pub category: String,
    pub description: Option<String>,
    pub allergens_checked: Vec<String>,
    pub item_allergens: Vec<String>,
    /// Requested allergens present in the item, in the caller's spelling
    pub found_allergens: Vec<String>,
    pub has_allergens: bool,
    pub dietary_flags: Vec<String>,
    pub safe: bool,
    pub message: String,
}

pub struct AllergenService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AllergenService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn check(&self, query: AllergenQuery) -> DomainResult<AllergenReport> {
        if query.allergens.is_empty() {
            return Err(DomainError::invalid(
                "Missing or invalid parameters",
                "Please tell me which allergens to check for.",
            ));
        }

        let item = self
            .repos
            .menu()
            .find_available_by_name(query.item_name.trim())
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "MenuItem",
                field: "name",
                value: query.item_name.clone(),
            })?;

        let report = report(item, query.allergens);
        info!(
            item = %report.item_name,
            safe = report.safe,
            found = ?report.found_allergens,
            "Allergen check"
        );
        Ok(report)
    }
}

fn report(item: MenuItem, checked: Vec<String>) -> AllergenReport {
    let found = item.matching_allergens(&checked);
    let has_allergens = !found.is_empty();

    let message = if has_allergens {
        format!(
            "Warning: \"{}\" contains {}. Would you like me to suggest alternative items without these allergens?",
            item.name,
            found.join(", ")
        )
    } else if item.allergens.is_empty() {
        format!("Good news! \"{}\" does not contain {}.", item.name, checked.join(", "))
    } else {
        format!(
            "Good news! \"{}\" does not contain {}. However, it does contain: {}.",
            item.name,
            checked.join(", "),
            item.allergens.join(", ")
        )
    };

    AllergenReport {
        item_name: item.name,
        category: item.category_name,
        description: item.description,
        allergens_checked: checked,
        item_allergens: item.allergens,
        found_allergens: found,
        has_allergens,
        dietary_flags: item.dietary_flags,
        safe: !has_allergens,
        message,
    }
}
