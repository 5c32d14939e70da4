//! MenuItem entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(nullable)]
    pub description: Option<String>,

    pub price: Decimal,

    /// JSON array of allergen names
    pub allergens: String,

    /// JSON array of flags such as "vegetarian" or "gluten-free"
    pub dietary_flags: String,

    pub category_id: i32,

    pub popular: bool,

    pub spicy_level: i32,

    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_category::Entity",
        from = "Column::CategoryId",
        to = "super::menu_category::Column::Id"
    )]
    MenuCategory,
}

impl Related<super::menu_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
