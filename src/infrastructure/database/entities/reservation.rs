//! Reservation entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub confirmation_code: String,

    pub customer_name: String,
    pub customer_phone: String,

    #[sea_orm(nullable)]
    pub customer_email: Option<String>,

    pub party_size: i32,
    pub reservation_date: Date,
    pub reservation_time: Time,

    #[sea_orm(nullable)]
    pub special_requests: Option<String>,

    /// JSON array, absent when the caller gave none
    #[sea_orm(nullable)]
    pub dietary_restrictions: Option<String>,

    #[sea_orm(nullable)]
    pub occasion: Option<String>,

    /// Reservation status: confirmed, cancelled
    pub status: String,

    #[sea_orm(nullable)]
    pub session_id: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
