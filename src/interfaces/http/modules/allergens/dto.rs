//! Allergen request DTO

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::AllergenQuery;
use crate::interfaces::http::common::RequestContract;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckAllergensRequest {
    /// Menu item name, matched case-insensitively
    #[validate(required, length(min = 1))]
    pub item_name: Option<String>,
    /// Allergens the guest wants to avoid
    #[validate(required, length(min = 1))]
    pub allergens: Option<Vec<String>>,
}

impl RequestContract for CheckAllergensRequest {
    const ERROR: &'static str = "Missing or invalid parameters";
    const REQUIRED: &'static [&'static str] = &["item_name", "allergens (array)"];
}

impl From<CheckAllergensRequest> for AllergenQuery {
    fn from(req: CheckAllergensRequest) -> Self {
        Self {
            item_name: req.item_name.unwrap_or_default(),
            allergens: req.allergens.unwrap_or_default(),
        }
    }
}
