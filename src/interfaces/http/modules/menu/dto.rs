//! Menu request DTO

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::MenuQuery;
use crate::interfaces::http::common::RequestContract;

/// Both filters are optional; an empty body lists the whole menu.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GetMenuRequest {
    /// One of starters, traditional, seafood, mains, desserts, drinks
    pub category: Option<String>,
    /// A dietary flag such as `vegan` or `gluten-free`
    pub dietary_filter: Option<String>,
}

impl RequestContract for GetMenuRequest {
    const ERROR: &'static str = "Invalid request body";
    const REQUIRED: &'static [&'static str] = &[];
}

impl From<GetMenuRequest> for MenuQuery {
    fn from(req: GetMenuRequest) -> Self {
        Self {
            category: req.category,
            dietary_filter: req.dietary_filter,
        }
    }
}
