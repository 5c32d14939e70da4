//! Takeaway and delivery orders

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::domain::identifiers::{estimated_minutes, order_number};
use crate::domain::order::{order_total, DeliveryAddress, NewOrder, OrderLine, OrderType, PricedLine};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub order_type: String,
    pub items: Vec<OrderLine>,
    pub delivery_address: Option<String>,
    pub delivery_city: Option<String>,
    pub delivery_postal_code: Option<String>,
    pub special_instructions: Option<String>,
    pub session_id: Option<String>,
}

/// A line as the caller asked for it, echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RequestedItem {
    pub item_name: String,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<String>,
}

impl From<OrderLine> for RequestedItem {
    fn from(line: OrderLine) -> Self {
        Self {
            item_name: line.item_name,
            quantity: line.quantity,
            modifications: line.modifications,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderConfirmation {
    pub success: bool,
    pub order_number: String,
    pub order_id: i32,
    pub customer_name: String,
    pub order_type: String,
    pub total_amount: f64,
    pub estimated_time_minutes: i32,
    pub items: Vec<RequestedItem>,
    /// Only set for delivery orders
    pub delivery_address: Option<String>,
    pub special_instructions: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

pub struct OrderService {
    repos: Arc<dyn RepositoryProvider>,
    delivery_fee: Decimal,
}

impl OrderService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, delivery_fee: Decimal) -> Self {
        Self { repos, delivery_fee }
    }

    /// Price and store an order.
    ///
    /// Prices are re-read from the menu. Lines naming an item that is not
    /// on the menu (or not available) are left out of the total and of the
    /// stored order items, but are still echoed back in `items`.
    pub async fn create(&self, cmd: CreateOrder) -> DomainResult<OrderConfirmation> {
        let order_type = OrderType::parse(&cmd.order_type).ok_or_else(|| {
            DomainError::invalid(
                "Invalid order_type",
                "order_type must be either \"delivery\" or \"pickup\"",
            )
        })?;
        let delivery = validate_delivery(order_type, &cmd)?;
        if cmd.items.is_empty() {
            return Err(DomainError::invalid(
                "Missing required parameters",
                "Please tell me what you would like to order.",
            ));
        }
        if let Some(line) = cmd.items.iter().find(|line| line.quantity < 1) {
            return Err(DomainError::invalid(
                "Invalid quantity",
                format!("Quantity for \"{}\" must be at least 1.", line.item_name),
            ));
        }

        let lines = self.price_lines(&cmd.items).await?;
        let total = order_total(&lines, order_type, self.delivery_fee);

        let (number, estimate) = {
            let mut rng = rand::thread_rng();
            (order_number(&mut rng), estimated_minutes(&mut rng))
        };

        let order = self
            .repos
            .orders()
            .create(NewOrder {
                order_number: number,
                customer_name: cmd.customer_name.clone(),
                customer_phone: cmd.customer_phone,
                customer_email: cmd.customer_email,
                order_type,
                delivery,
                total_amount: total,
                special_instructions: cmd.special_instructions.clone(),
                estimated_time_minutes: estimate,
                session_id: cmd.session_id,
            })
            .await?;
        self.repos.orders().add_items(order.id, &lines).await?;

        info!(
            order_number = %order.order_number,
            order_type = %order_type,
            total = %order.total_amount,
            requested = cmd.items.len(),
            priced = lines.len(),
            "Order created"
        );

        Ok(OrderConfirmation {
            success: true,
            message: format!(
                "Order confirmed! Order number: {}. Estimated {} time: {} minutes.",
                order.order_number, order_type, order.estimated_time_minutes
            ),
            order_number: order.order_number,
            order_id: order.id,
            customer_name: cmd.customer_name,
            order_type: order_type.as_str().to_string(),
            total_amount: order.total_amount.to_f64().unwrap_or_default(),
            estimated_time_minutes: order.estimated_time_minutes,
            items: cmd.items.into_iter().map(RequestedItem::from).collect(),
            delivery_address: order.delivery.map(|d| d.address),
            special_instructions: cmd.special_instructions,
            created_at: order.created_at,
        })
    }

    async fn price_lines(&self, requested: &[OrderLine]) -> DomainResult<Vec<PricedLine>> {
        let mut lines = Vec::with_capacity(requested.len());
        for line in requested {
            match self.repos.menu().find_available_by_name(line.item_name.trim()).await? {
                Some(item) => lines.push(PricedLine {
                    menu_item_id: item.id,
                    menu_item_name: item.name,
                    quantity: line.quantity,
                    modifications: line.modifications.clone(),
                    item_price: item.price,
                }),
                None => debug!(item = %line.item_name, "Dropping order line not on the menu"),
            }
        }
        Ok(lines)
    }
}

fn validate_delivery(order_type: OrderType, cmd: &CreateOrder) -> DomainResult<Option<DeliveryAddress>> {
    if order_type != OrderType::Delivery {
        return Ok(None);
    }
    match cmd.delivery_address.as_deref().map(str::trim) {
        Some(address) if !address.is_empty() => Ok(Some(DeliveryAddress {
            address: address.to_string(),
            city: cmd.delivery_city.clone(),
            postal_code: cmd.delivery_postal_code.clone(),
        })),
        _ => Err(DomainError::invalid(
            "Missing delivery address",
            "Delivery address is required for delivery orders",
        )),
    }
}
