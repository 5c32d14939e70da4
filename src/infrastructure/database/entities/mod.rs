//! Database entities module

pub mod menu_category;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod reservation;
pub mod table_availability;

pub use menu_category::Entity as MenuCategory;
pub use menu_item::Entity as MenuItem;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use reservation::Entity as Reservation;
pub use table_availability::Entity as TableAvailability;
