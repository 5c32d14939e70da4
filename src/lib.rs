//! # Restaurant voice assistant backend
//!
//! HTTP tool endpoints behind a realtime voice assistant that takes table
//! reservations, answers menu and allergen questions and places pickup or
//! delivery orders, plus a proxy that mints short-lived voice sessions.
//!
//! ## Architecture
//!
//! - **domain**: entities, identifiers and repository traits
//! - **application**: one service per voice tool, cache read-through, voice session minting
//! - **infrastructure**: SeaORM/SQLite persistence, in-memory cache, realtime provider client
//! - **interfaces**: axum HTTP router, extractors and error responses
//! - **shared**: error taxonomy and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, run_migrations, DatabaseConfig};

pub use interfaces::http::{create_router, ApiState};
