//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{db_err, insert_err};
use crate::domain::reservation::{
    NewReservation, Reservation, ReservationRepository, ReservationStatus,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;
use crate::shared::errors::InfraError;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        confirmation_code: m.confirmation_code,
        customer_name: m.customer_name,
        customer_phone: m.customer_phone,
        customer_email: m.customer_email,
        party_size: m.party_size,
        reservation_date: m.reservation_date,
        reservation_time: m.reservation_time,
        special_requests: m.special_requests,
        dietary_restrictions: m
            .dietary_restrictions
            .and_then(|raw| serde_json::from_str(&raw).ok()),
        occasion: m.occasion,
        status: ReservationStatus::from_str(&m.status),
        session_id: m.session_id,
        created_at: m.created_at,
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!("Saving reservation: {}", r.confirmation_code);

        let dietary_restrictions = r
            .dietary_restrictions
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(InfraError::from)?;

        let code = r.confirmation_code.clone();
        let model = reservation::ActiveModel {
            confirmation_code: Set(r.confirmation_code),
            customer_name: Set(r.customer_name),
            customer_phone: Set(r.customer_phone),
            customer_email: Set(r.customer_email),
            party_size: Set(r.party_size),
            reservation_date: Set(r.reservation_date),
            reservation_time: Set(r.reservation_time),
            special_requests: Set(r.special_requests),
            dietary_restrictions: Set(dietary_restrictions),
            occasion: Set(r.occasion),
            status: Set(ReservationStatus::Confirmed.as_str().to_string()),
            session_id: Set(r.session_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let saved = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Reservation", &code))?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_confirmation_code(&self, code: &str) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find()
            .filter(reservation::Column::ConfirmationCode.eq(code))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()> {
        debug!("Updating reservation {} to {}", id, status);

        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: reservation::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
