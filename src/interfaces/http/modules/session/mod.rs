//! Realtime voice session endpoint

pub mod handlers;

pub use handlers::*;
