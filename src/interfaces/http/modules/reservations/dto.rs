//! Reservation DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::{CancelReservation, CreateReservation};
use crate::interfaces::http::common::RequestContract;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    #[validate(required, length(min = 1))]
    pub customer_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    #[validate(required)]
    pub party_size: Option<i32>,
    /// `YYYY-MM-DD`
    #[validate(required, length(min = 1))]
    pub reservation_date: Option<String>,
    /// `HH:MM`
    #[validate(required, length(min = 1))]
    pub reservation_time: Option<String>,
    pub special_requests: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    /// Birthday, anniversary, ...
    pub occasion: Option<String>,
    pub session_id: Option<String>,
}

impl RequestContract for CreateReservationRequest {
    const REQUIRED: &'static [&'static str] = &[
        "customer_name",
        "customer_phone",
        "party_size",
        "reservation_date",
        "reservation_time",
    ];
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            customer_name: req.customer_name.unwrap_or_default(),
            customer_phone: req.customer_phone.unwrap_or_default(),
            customer_email: req.customer_email,
            party_size: req.party_size.unwrap_or_default(),
            reservation_date: req.reservation_date.unwrap_or_default(),
            reservation_time: req.reservation_time.unwrap_or_default(),
            special_requests: req.special_requests,
            dietary_restrictions: req.dietary_restrictions,
            occasion: req.occasion,
            session_id: req.session_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CancelReservationRequest {
    #[validate(required, length(min = 1))]
    pub confirmation_code: Option<String>,
    /// Must match the phone number the booking was made with
    #[validate(required, length(min = 1))]
    pub customer_phone: Option<String>,
    pub reason: Option<String>,
}

impl RequestContract for CancelReservationRequest {
    const REQUIRED: &'static [&'static str] = &["confirmation_code", "customer_phone"];
}

impl From<CancelReservationRequest> for CancelReservation {
    fn from(req: CancelReservationRequest) -> Self {
        Self {
            confirmation_code: req.confirmation_code.unwrap_or_default(),
            customer_phone: req.customer_phone.unwrap_or_default(),
            reason: req.reason,
        }
    }
}
