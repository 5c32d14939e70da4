//! SeaORM implementation of AvailabilityRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};

use super::db_err;
use crate::domain::availability::{AvailabilityRepository, AvailabilitySlot, SlotKey};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::table_availability::{self, Column, Entity};

pub struct SeaOrmAvailabilityRepository {
    db: DatabaseConnection,
}

impl SeaOrmAvailabilityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: table_availability::Model) -> AvailabilitySlot {
    AvailabilitySlot {
        id: m.id,
        date: m.date,
        time_slot: m.time_slot,
        available_tables: m.available_tables,
        max_party_size: m.max_party_size,
    }
}

fn at_slot(key: SlotKey) -> Select<Entity> {
    Entity::find()
        .filter(Column::Date.eq(key.date))
        .filter(Column::TimeSlot.eq(key.time))
}

#[async_trait]
impl AvailabilityRepository for SeaOrmAvailabilityRepository {
    async fn find_open_slot(
        &self,
        key: SlotKey,
        party_size: i32,
    ) -> DomainResult<Option<AvailabilitySlot>> {
        let model = at_slot(key)
            .filter(Column::AvailableTables.gt(0))
            .filter(Column::MaxPartySize.gte(party_size))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn decrement(&self, key: SlotKey) -> DomainResult<bool> {
        debug!("Decrementing tables for {} {}", key.date, key.time);

        let result = Entity::update_many()
            .col_expr(
                Column::AvailableTables,
                Expr::col(Column::AvailableTables).sub(1),
            )
            .filter(Column::Date.eq(key.date))
            .filter(Column::TimeSlot.eq(key.time))
            .filter(Column::AvailableTables.gt(0))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn increment(&self, key: SlotKey) -> DomainResult<bool> {
        debug!("Incrementing tables for {} {}", key.date, key.time);

        let result = Entity::update_many()
            .col_expr(
                Column::AvailableTables,
                Expr::col(Column::AvailableTables).add(1),
            )
            .filter(Column::Date.eq(key.date))
            .filter(Column::TimeSlot.eq(key.time))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
