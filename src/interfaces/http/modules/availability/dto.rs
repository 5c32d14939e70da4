//! Availability request DTO

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::AvailabilityQuery;
use crate::interfaces::http::common::RequestContract;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckAvailabilityRequest {
    /// `YYYY-MM-DD`
    #[validate(required, length(min = 1))]
    pub date: Option<String>,
    /// `HH:MM`, 24-hour clock
    #[validate(required, length(min = 1))]
    pub time: Option<String>,
    #[validate(required)]
    pub party_size: Option<i32>,
}

impl RequestContract for CheckAvailabilityRequest {
    const REQUIRED: &'static [&'static str] = &["date", "time", "party_size"];
}

impl From<CheckAvailabilityRequest> for AvailabilityQuery {
    fn from(req: CheckAvailabilityRequest) -> Self {
        Self {
            date: req.date.unwrap_or_default(),
            time: req.time.unwrap_or_default(),
            party_size: req.party_size.unwrap_or_default(),
        }
    }
}
