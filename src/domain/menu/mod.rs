//! Menu aggregate
//!
//! Menu items and categories are maintained outside this service and are
//! read-only here.

pub mod model;
pub mod repository;

pub use model::{MenuCategory, MenuFilter, MenuItem};
pub use repository::MenuRepository;
