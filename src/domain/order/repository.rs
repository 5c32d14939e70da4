//! Order repository interface

use async_trait::async_trait;

use super::model::{NewOrder, Order, OrderItem, PricedLine};
use crate::domain::DomainResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order header with status `pending`.
    ///
    /// An order number that already exists fails with
    /// `DomainError::DuplicateResource`.
    async fn create(&self, order: NewOrder) -> DomainResult<Order>;

    /// Insert one order item per line. Each line is its own write.
    async fn add_items(&self, order_id: i32, lines: &[PricedLine]) -> DomainResult<Vec<OrderItem>>;

    async fn find_by_order_number(&self, order_number: &str) -> DomainResult<Option<Order>>;

    async fn find_items(&self, order_id: i32) -> DomainResult<Vec<OrderItem>>;
}
