//! Order domain entities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// How the customer receives the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }

    /// Exact match; anything else is not an order type.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "delivery" => Some(Self::Delivery),
            "pickup" => Some(Self::Pickup),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

/// One requested line, as said by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_name: String,
    pub quantity: i32,
    pub modifications: Option<String>,
}

/// A requested line resolved against the menu at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub quantity: i32,
    pub modifications: Option<String>,
    /// Unit price copied from the menu when the order was placed
    pub item_price: Decimal,
}

impl PricedLine {
    pub fn subtotal(&self) -> Decimal {
        self.item_price * Decimal::from(self.quantity)
    }
}

/// Sum of all line subtotals, plus `delivery_fee` for delivery orders.
pub fn order_total(lines: &[PricedLine], order_type: OrderType, delivery_fee: Decimal) -> Decimal {
    let items: Decimal = lines.iter().map(PricedLine::subtotal).sum();
    match order_type {
        OrderType::Delivery => items + delivery_fee,
        OrderType::Pickup => items,
    }
}

/// Delivery details, present only for delivery orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryAddress {
    pub address: String,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub order_type: OrderType,
    pub delivery: Option<DeliveryAddress>,
    pub total_amount: Decimal,
    pub special_instructions: Option<String>,
    pub estimated_time_minutes: i32,
    pub session_id: Option<String>,
}

/// Stored order header
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    /// `ORD` + 6 digits
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub order_type: OrderType,
    pub delivery: Option<DeliveryAddress>,
    pub total_amount: Decimal,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
    pub estimated_time_minutes: i32,
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Stored order line
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub quantity: i32,
    pub modifications: Option<String>,
    pub item_price: Decimal,
}
