//! SeaORM implementation of MenuRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::{db_err, json_list};
use crate::domain::menu::{MenuFilter, MenuItem, MenuRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{menu_category, menu_item};

pub struct SeaOrmMenuRepository {
    db: DatabaseConnection,
}

impl SeaOrmMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: menu_item::Model, category: Option<menu_category::Model>) -> MenuItem {
    MenuItem {
        id: m.id,
        name: m.name,
        description: m.description,
        price: m.price,
        allergens: json_list(&m.allergens),
        dietary_flags: json_list(&m.dietary_flags),
        category_id: m.category_id,
        category_name: category.map(|c| c.name).unwrap_or_default(),
        popular: m.popular,
        spicy_level: m.spicy_level,
        available: m.available,
    }
}

// ── MenuRepository impl ─────────────────────────────────────────

#[async_trait]
impl MenuRepository for SeaOrmMenuRepository {
    async fn list_available(&self, filter: &MenuFilter) -> DomainResult<Vec<MenuItem>> {
        debug!("Listing menu items: {:?}", filter);

        let mut query = menu_item::Entity::find()
            .find_also_related(menu_category::Entity)
            .filter(menu_item::Column::Available.eq(true));

        query = match filter.category_id {
            Some(category_id) => query.filter(menu_item::Column::CategoryId.eq(category_id)),
            None => query.order_by_asc(menu_category::Column::DisplayOrder),
        };

        let rows = query
            .order_by_desc(menu_item::Column::Popular)
            .order_by_asc(menu_item::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        // Flags live in a JSON column, so the dietary filter runs here.
        Ok(rows
            .into_iter()
            .map(|(item, category)| model_to_domain(item, category))
            .filter(|item| match filter.dietary_flag.as_deref() {
                Some(flag) => item.has_dietary_flag(flag),
                None => true,
            })
            .collect())
    }

    async fn find_available_by_name(&self, name: &str) -> DomainResult<Option<MenuItem>> {
        let row = menu_item::Entity::find()
            .find_also_related(menu_category::Entity)
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    menu_item::Entity,
                    menu_item::Column::Name,
                ))))
                .eq(name.to_lowercase()),
            )
            .filter(menu_item::Column::Available.eq(true))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(row.map(|(item, category)| model_to_domain(item, category)))
    }
}
