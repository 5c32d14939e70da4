//! Extractors shared by the API handlers

pub mod client_addr;
pub mod validated_json;

pub use client_addr::ClientAddr;
pub use validated_json::{RequestContract, ValidatedJson};
