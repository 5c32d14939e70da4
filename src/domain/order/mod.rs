//! Order aggregate

pub mod model;
pub mod repository;

pub use model::{
    order_total, DeliveryAddress, NewOrder, Order, OrderItem, OrderLine, OrderStatus, OrderType,
    PricedLine,
};
pub use repository::OrderRepository;
