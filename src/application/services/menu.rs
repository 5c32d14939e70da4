//! Menu listings

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::cached::read_through;
use crate::domain::cache::menu_key;
use crate::domain::{DomainResult, MenuCategory, MenuFilter, MenuItem, RepositoryProvider, ResponseCache};

#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub dietary_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuEntry {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub allergens: Vec<String>,
    pub dietary_flags: Vec<String>,
    pub popular: bool,
    pub spicy_level: i32,
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            price: item.price.to_f64().unwrap_or_default(),
            name: item.name,
            description: item.description,
            category: item.category_name,
            allergens: item.allergens,
            dietary_flags: item.dietary_flags,
            popular: item.popular,
            spicy_level: item.spicy_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuListing {
    /// Requested category, or "all"
    pub category: String,
    pub dietary_filter: Option<String>,
    pub count: usize,
    pub items: Vec<MenuEntry>,
}

pub struct MenuService {
    repos: Arc<dyn RepositoryProvider>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl MenuService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, cache: Arc<dyn ResponseCache>, ttl: Duration) -> Self {
        Self { repos, cache, ttl }
    }

    /// Available items, optionally narrowed to one category and/or one
    /// dietary flag. An unknown category yields an empty listing.
    pub async fn list(&self, query: MenuQuery) -> DomainResult<MenuListing> {
        let category = query.category.filter(|c| !c.is_empty());
        let dietary_filter = query.dietary_filter.filter(|f| !f.is_empty());

        let key = menu_key(category.as_deref(), dietary_filter.as_deref());
        let repos = &self.repos;
        let (category, dietary_filter) = (&category, &dietary_filter);
        read_through(self.cache.as_ref(), &key, self.ttl, || async move {
            let items = match category.as_deref() {
                None => {
                    let filter = MenuFilter {
                        category_id: None,
                        dietary_flag: dietary_filter.clone(),
                    };
                    repos.menu().list_available(&filter).await?
                }
                Some(name) => match MenuCategory::from_name(name) {
                    Some(known) => {
                        let filter = MenuFilter {
                            category_id: Some(known.id()),
                            dietary_flag: dietary_filter.clone(),
                        };
                        repos.menu().list_available(&filter).await?
                    }
                    None => Vec::new(),
                },
            };

            info!(
                category = category.as_deref().unwrap_or("all"),
                dietary_filter = dietary_filter.as_deref().unwrap_or("none"),
                count = items.len(),
                "Menu retrieved"
            );

            let items: Vec<MenuEntry> = items.into_iter().map(MenuEntry::from).collect();
            Ok(MenuListing {
                category: category.clone().unwrap_or_else(|| "all".to_string()),
                dietary_filter: dietary_filter.clone(),
                count: items.len(),
                items,
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::repos;
    use crate::infrastructure::cache::InMemoryCache;
    use crate::infrastructure::database::testing::seeded_db;

    fn service(db: &sea_orm::DatabaseConnection) -> MenuService {
        MenuService::new(repos(db), Arc::new(InMemoryCache::new()), Duration::from_secs(3600))
    }

    fn query(category: Option<&str>, dietary_filter: Option<&str>) -> MenuQuery {
        MenuQuery {
            category: category.map(String::from),
            dietary_filter: dietary_filter.map(String::from),
        }
    }

    #[tokio::test]
    async fn full_menu_lists_available_items() {
        let db = seeded_db().await;
        let listing = service(&db).list(MenuQuery::default()).await.unwrap();
        assert_eq!(listing.category, "all");
        assert_eq!(listing.dietary_filter, None);
        assert_eq!(listing.count, 9);
        assert_eq!(listing.items[0].name, "Pastizzi");
        assert_eq!(listing.items[0].price, 4.5);
        assert_eq!(listing.items[0].category, "Starters");
    }

    #[tokio::test]
    async fn category_and_filter_narrow_the_listing() {
        let db = seeded_db().await;
        let listing = service(&db)
            .list(query(Some("desserts"), Some("vegan")))
            .await
            .unwrap();
        assert_eq!(listing.category, "desserts");
        assert_eq!(listing.dietary_filter.as_deref(), Some("vegan"));
        assert_eq!(listing.count, 1);
        assert_eq!(listing.items[0].name, "Imqaret");
    }

    #[tokio::test]
    async fn unknown_category_is_empty_not_an_error() {
        let db = seeded_db().await;
        let listing = service(&db).list(query(Some("brunch"), None)).await.unwrap();
        assert_eq!(listing.category, "brunch");
        assert_eq!(listing.count, 0);
        assert!(listing.items.is_empty());
    }

    #[tokio::test]
    async fn empty_strings_mean_no_filter() {
        let db = seeded_db().await;
        let listing = service(&db).list(query(Some(""), Some(""))).await.unwrap();
        assert_eq!(listing.category, "all");
        assert_eq!(listing.count, 9);
    }
}
