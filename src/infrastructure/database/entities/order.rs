//! Order entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub order_number: String,

    pub customer_name: String,
    pub customer_phone: String,

    #[sea_orm(nullable)]
    pub customer_email: Option<String>,

    /// Order type: delivery, pickup
    pub order_type: String,

    #[sea_orm(nullable)]
    pub delivery_address: Option<String>,

    #[sea_orm(nullable)]
    pub delivery_city: Option<String>,

    #[sea_orm(nullable)]
    pub delivery_postal_code: Option<String>,

    pub total_amount: Decimal,

    #[sea_orm(nullable)]
    pub special_instructions: Option<String>,

    /// Order status: pending
    pub status: String,

    pub estimated_time_minutes: i32,

    #[sea_orm(nullable)]
    pub session_id: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
