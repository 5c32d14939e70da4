//! Order DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::CreateOrder;
use crate::domain::OrderLine;
use crate::interfaces::http::common::RequestContract;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub item_name: String,
    pub quantity: i32,
    pub modifications: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(required, length(min = 1))]
    pub customer_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    /// `pickup` or `delivery`
    #[validate(required, length(min = 1))]
    pub order_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub items: Option<Vec<OrderItemRequest>>,
    /// Required for delivery orders
    pub delivery_address: Option<String>,
    pub delivery_city: Option<String>,
    pub delivery_postal_code: Option<String>,
    pub special_instructions: Option<String>,
    pub session_id: Option<String>,
}

impl RequestContract for CreateOrderRequest {
    const REQUIRED: &'static [&'static str] =
        &["customer_name", "customer_phone", "order_type", "items"];
}

impl From<OrderItemRequest> for OrderLine {
    fn from(item: OrderItemRequest) -> Self {
        Self {
            item_name: item.item_name,
            quantity: item.quantity,
            modifications: item.modifications,
        }
    }
}

impl From<CreateOrderRequest> for CreateOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            customer_name: req.customer_name.unwrap_or_default(),
            customer_phone: req.customer_phone.unwrap_or_default(),
            customer_email: req.customer_email,
            order_type: req.order_type.unwrap_or_default(),
            items: req
                .items
                .unwrap_or_default()
                .into_iter()
                .map(OrderLine::from)
                .collect(),
            delivery_address: req.delivery_address,
            delivery_city: req.delivery_city,
            delivery_postal_code: req.delivery_postal_code,
            special_instructions: req.special_instructions,
            session_id: req.session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(items: serde_json::Value) -> CreateOrderRequest {
        serde_json::from_value(json!({
            "customer_name": "Maria Borg",
            "customer_phone": "+356 9912 3456",
            "order_type": "pickup",
            "items": items,
        }))
        .unwrap()
    }

    #[test]
    fn items_list_must_not_be_empty() {
        assert!(request(json!([])).validate().is_err());
        assert!(request(json!([{"item_name": "Margherita Pizza", "quantity": 2}]))
            .validate()
            .is_ok());
    }

    #[test]
    fn item_lines_convert_with_modifications() {
        let order = CreateOrder::from(request(json!([
            {"item_name": "Margherita Pizza", "quantity": 2, "modifications": "extra basil"}
        ])));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].modifications.as_deref(), Some("extra basil"));
    }
}
