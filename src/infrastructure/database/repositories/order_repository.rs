//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, insert_err};
use crate::domain::order::{
    DeliveryAddress, NewOrder, Order, OrderItem, OrderRepository, OrderStatus, OrderType,
    PricedLine,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{order, order_item};

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn order_to_domain(m: order::Model) -> Order {
    let order_type = OrderType::parse(&m.order_type).unwrap_or(OrderType::Pickup);
    let delivery = m.delivery_address.map(|address| DeliveryAddress {
        address,
        city: m.delivery_city,
        postal_code: m.delivery_postal_code,
    });
    Order {
        id: m.id,
        order_number: m.order_number,
        customer_name: m.customer_name,
        customer_phone: m.customer_phone,
        customer_email: m.customer_email,
        order_type,
        delivery,
        total_amount: m.total_amount,
        special_instructions: m.special_instructions,
        status: OrderStatus::Pending,
        estimated_time_minutes: m.estimated_time_minutes,
        session_id: m.session_id,
        created_at: m.created_at,
    }
}

fn item_to_domain(m: order_item::Model) -> OrderItem {
    OrderItem {
        id: m.id,
        order_id: m.order_id,
        menu_item_id: m.menu_item_id,
        menu_item_name: m.menu_item_name,
        quantity: m.quantity,
        modifications: m.modifications,
        item_price: m.item_price,
    }
}

// ── OrderRepository impl ────────────────────────────────────────

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, o: NewOrder) -> DomainResult<Order> {
        debug!("Saving order: {}", o.order_number);

        let number = o.order_number.clone();
        let delivery = o.delivery.unwrap_or_default();
        let has_address = !delivery.address.is_empty();
        let model = order::ActiveModel {
            order_number: Set(o.order_number),
            customer_name: Set(o.customer_name),
            customer_phone: Set(o.customer_phone),
            customer_email: Set(o.customer_email),
            order_type: Set(o.order_type.as_str().to_string()),
            delivery_address: Set(has_address.then_some(delivery.address)),
            delivery_city: Set(delivery.city),
            delivery_postal_code: Set(delivery.postal_code),
            total_amount: Set(o.total_amount),
            special_instructions: Set(o.special_instructions),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            estimated_time_minutes: Set(o.estimated_time_minutes),
            session_id: Set(o.session_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let saved = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Order", &number))?;
        Ok(order_to_domain(saved))
    }

    async fn add_items(&self, order_id: i32, lines: &[PricedLine]) -> DomainResult<Vec<OrderItem>> {
        debug!("Saving {} items for order {}", lines.len(), order_id);

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let model = order_item::ActiveModel {
                order_id: Set(order_id),
                menu_item_id: Set(line.menu_item_id),
                menu_item_name: Set(line.menu_item_name.clone()),
                quantity: Set(line.quantity),
                modifications: Set(line.modifications.clone()),
                item_price: Set(line.item_price),
                ..Default::default()
            };
            let saved = model.insert(&self.db).await.map_err(db_err)?;
            items.push(item_to_domain(saved));
        }
        Ok(items)
    }

    async fn find_by_order_number(&self, order_number: &str) -> DomainResult<Option<Order>> {
        let model = order::Entity::find()
            .filter(order::Column::OrderNumber.eq(order_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(order_to_domain))
    }

    async fn find_items(&self, order_id: i32) -> DomainResult<Vec<OrderItem>> {
        let models = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(item_to_domain).collect())
    }
}
