//! Infrastructure layer - external concerns

pub mod cache;
pub mod database;
pub mod voice;

pub use cache::InMemoryCache;
pub use database::{init_database, run_migrations, DatabaseConfig};
pub use voice::OpenAiRealtimeClient;
