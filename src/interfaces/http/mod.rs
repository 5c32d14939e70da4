//! HTTP interface
//!
//! - `common`: shared extractors (validated JSON bodies, caller address)
//! - `error`: JSON error responses
//! - `modules`: one module per endpoint group, plus request-id and metrics middleware
//! - `router`: route table, CORS, static files and the OpenAPI document

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use error::ApiError;
pub use router::{create_router, ApiDoc, ApiState};
