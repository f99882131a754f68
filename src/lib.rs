//! KV Gateway - HTTP access to a Redis key-value store
//!
//! Exposes set/get/delete/exists/ttl/expire over REST and forwards every
//! operation to a pluggable expiring key-value backend.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::StoreError;
pub use store::{KvStore, MemoryStore, RedisStore, Ttl};
pub use tasks::spawn_cleanup_task;
