//! Reservation booking and cancellation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::availability::parse_slot;
use crate::domain::identifiers::confirmation_code;
use crate::domain::reservation::{NewReservation, ReservationStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, SlotKey};

#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub party_size: i32,
    pub reservation_date: String,
    pub reservation_time: String,
    pub special_requests: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub occasion: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationConfirmation {
    pub success: bool,
    pub confirmation_code: String,
    pub reservation_id: i32,
    pub customer_name: String,
    pub party_size: i32,
    pub reservation_date: String,
    pub reservation_time: String,
    pub special_requests: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub occasion: Option<String>,
    /// Whether a table was taken from the slot. The booking stands either way.
    pub availability_updated: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CancelReservation {
    pub confirmation_code: String,
    pub customer_phone: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CancellationConfirmation {
    pub success: bool,
    pub confirmation_code: String,
    pub customer_name: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub status: String,
    /// Whether the table was handed back to the slot
    pub availability_updated: bool,
    pub message: String,
}

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Book a table.
    ///
    /// The reservation insert and the table decrement are two independent
    /// writes. The reservation succeeds even when no table could be taken
    /// (full slot, unknown slot, or a failed update); `availability_updated`
    /// reports which happened. Cached availability answers are left alone.
    pub async fn create(&self, cmd: CreateReservation) -> DomainResult<ReservationConfirmation> {
        let slot = parse_slot(&cmd.reservation_date, &cmd.reservation_time)?;
        if cmd.party_size < 1 {
            return Err(DomainError::invalid(
                "Invalid party_size",
                "Party size must be at least 1 guest.",
            ));
        }

        let code = confirmation_code(&mut rand::thread_rng());
        let reservation = self
            .repos
            .reservations()
            .create(NewReservation {
                confirmation_code: code,
                customer_name: cmd.customer_name.clone(),
                customer_phone: cmd.customer_phone,
                customer_email: cmd.customer_email,
                party_size: cmd.party_size,
                reservation_date: slot.date,
                reservation_time: slot.time,
                special_requests: cmd.special_requests.clone(),
                dietary_restrictions: cmd.dietary_restrictions.clone(),
                occasion: cmd.occasion.clone(),
                session_id: cmd.session_id,
            })
            .await?;

        let availability_updated = self.take_table(slot, &reservation.confirmation_code).await;

        info!(
            confirmation_code = %reservation.confirmation_code,
            party_size = reservation.party_size,
            date = %cmd.reservation_date,
            time = %cmd.reservation_time,
            availability_updated,
            "Reservation created"
        );

        Ok(ReservationConfirmation {
            success: true,
            message: format!(
                "Reservation confirmed! Confirmation code: {}",
                reservation.confirmation_code
            ),
            confirmation_code: reservation.confirmation_code,
            reservation_id: reservation.id,
            customer_name: cmd.customer_name,
            party_size: cmd.party_size,
            reservation_date: cmd.reservation_date,
            reservation_time: cmd.reservation_time,
            special_requests: cmd.special_requests,
            dietary_restrictions: cmd.dietary_restrictions,
            occasion: cmd.occasion,
            availability_updated,
            created_at: reservation.created_at,
        })
    }

    /// Cancel a confirmed reservation. The caller must quote the phone
    /// number the booking was made with.
    pub async fn cancel(&self, cmd: CancelReservation) -> DomainResult<CancellationConfirmation> {
        let code = cmd.confirmation_code.trim().to_uppercase();
        let not_found = || DomainError::NotFound {
            entity: "Reservation",
            field: "confirmation_code",
            value: code.clone(),
        };

        let mut reservation = self
            .repos
            .reservations()
            .find_by_confirmation_code(&code)
            .await?
            .ok_or_else(not_found)?;

        if !reservation.phone_matches(&cmd.customer_phone) {
            return Err(not_found());
        }
        if !reservation.is_active() {
            return Err(DomainError::invalid(
                "Reservation already cancelled",
                format!("Reservation {} has already been cancelled.", code),
            ));
        }

        self.repos
            .reservations()
            .update_status(reservation.id, ReservationStatus::Cancelled)
            .await?;
        reservation.cancel();

        let availability_updated = self.return_table(reservation.slot(), &code).await;

        info!(
            confirmation_code = %code,
            reason = cmd.reason.as_deref().unwrap_or("none given"),
            availability_updated,
            "Reservation cancelled"
        );

        Ok(CancellationConfirmation {
            success: true,
            message: format!(
                "Your reservation {} for {} guests on {} at {} has been cancelled.",
                code,
                reservation.party_size,
                reservation.reservation_date.format("%Y-%m-%d"),
                reservation.reservation_time.format("%H:%M"),
            ),
            confirmation_code: code,
            customer_name: reservation.customer_name,
            reservation_date: reservation.reservation_date.format("%Y-%m-%d").to_string(),
            reservation_time: reservation.reservation_time.format("%H:%M").to_string(),
            status: reservation.status.as_str().to_string(),
            availability_updated,
        })
    }

    async fn take_table(&self, slot: SlotKey, code: &str) -> bool {
        match self.repos.availability().decrement(slot).await {
            Ok(true) => true,
            Ok(false) => {
                warn!(
                    confirmation_code = code,
                    date = %slot.date,
                    time = %slot.time,
                    "No table left to take for reservation"
                );
                false
            }
            Err(e) => {
                error!(confirmation_code = code, error = %e, "Failed to decrement table availability");
                false
            }
        }
    }

    async fn return_table(&self, slot: SlotKey, code: &str) -> bool {
        match self.repos.availability().increment(slot).await {
            Ok(updated) => {
                if !updated {
                    warn!(confirmation_code = code, "No availability slot to return table to");
                }
                updated
            }
            Err(e) => {
                error!(confirmation_code = code, error = %e, "Failed to increment table availability");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{repos, DAY};
    use crate::infrastructure::database::testing::{
        available_tables, seeded_db, set_available_tables, set_reservation_status, slot,
    };

    fn booking(time: &str) -> CreateReservation {
        CreateReservation {
            customer_name: "Maria Borg".into(),
            customer_phone: "+356 9912 3456".into(),
            customer_email: Some("maria@example.com".into()),
            party_size: 4,
            reservation_date: DAY.into(),
            reservation_time: time.into(),
            special_requests: None,
            dietary_restrictions: Some(vec!["vegetarian".into()]),
            occasion: Some("anniversary".into()),
            session_id: None,
        }
    }

    #[tokio::test]
    async fn booking_takes_a_table() {
        let db = seeded_db().await;
        let service = ReservationService::new(repos(&db));

        let confirmation = service.create(booking("19:30")).await.unwrap();
        assert!(confirmation.success);
        assert!(confirmation.availability_updated);
        assert!(confirmation.confirmation_code.starts_with("RES"));
        assert_eq!(
            confirmation.message,
            format!("Reservation confirmed! Confirmation code: {}", confirmation.confirmation_code)
        );
        assert_eq!(confirmation.reservation_time, "19:30");
        assert_eq!(available_tables(&db, slot("19:30")).await, 4);
    }

    #[tokio::test]
    async fn full_slot_still_books_without_decrement() {
        let db = seeded_db().await;
        set_available_tables(&db, slot("20:30"), 0).await;
        let service = ReservationService::new(repos(&db));

        let confirmation = service.create(booking("20:30")).await.unwrap();
        assert!(confirmation.success);
        assert!(!confirmation.availability_updated);
        assert_eq!(available_tables(&db, slot("20:30")).await, 0);
    }

    #[tokio::test]
    async fn unparseable_time_is_invalid_input() {
        let db = seeded_db().await;
        let service = ReservationService::new(repos(&db));
        let err = service.create(booking("half past seven")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn cancel_returns_the_table() {
        let db = seeded_db().await;
        let service = ReservationService::new(repos(&db));
        let booked = service.create(booking("21:00")).await.unwrap();
        assert_eq!(available_tables(&db, slot("21:00")).await, 4);

        let cancelled = service
            .cancel(CancelReservation {
                confirmation_code: booked.confirmation_code.to_lowercase(),
                customer_phone: "+35699123456".into(),
                reason: Some("plans changed".into()),
            })
            .await
            .unwrap();
        assert_eq!(cancelled.status, "cancelled");
        assert!(cancelled.availability_updated);
        assert_eq!(cancelled.reservation_time, "21:00");
        assert_eq!(available_tables(&db, slot("21:00")).await, 5);
    }

    #[tokio::test]
    async fn cancel_checks_phone_and_status() {
        let db = seeded_db().await;
        let service = ReservationService::new(repos(&db));
        let booked = service.create(booking("12:30")).await.unwrap();

        let wrong_phone = service
            .cancel(CancelReservation {
                confirmation_code: booked.confirmation_code.clone(),
                customer_phone: "+356 0000 0000".into(),
                reason: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(wrong_phone, DomainError::NotFound { .. }));

        let cancel = CancelReservation {
            confirmation_code: booked.confirmation_code.clone(),
            customer_phone: "+356 9912 3456".into(),
            reason: None,
        };
        service.cancel(cancel.clone()).await.unwrap();
        let twice = service.cancel(cancel).await.unwrap_err();
        assert!(matches!(twice, DomainError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn booking_in_a_staff_status_can_still_be_cancelled() {
        let db = seeded_db().await;
        let service = ReservationService::new(repos(&db));
        let booked = service.create(booking("13:00")).await.unwrap();
        set_reservation_status(&db, &booked.confirmation_code, "seated").await;

        let cancelled = service
            .cancel(CancelReservation {
                confirmation_code: booked.confirmation_code.clone(),
                customer_phone: "+356 9912 3456".into(),
                reason: None,
            })
            .await
            .unwrap();
        assert_eq!(cancelled.status, "cancelled");
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let db = seeded_db().await;
        let service = ReservationService::new(repos(&db));
        let err = service
            .cancel(CancelReservation {
                confirmation_code: "RES000000".into(),
                customer_phone: "+356 9912 3456".into(),
                reason: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
