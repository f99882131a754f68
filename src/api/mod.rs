//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `POST /api/store/set` - Store a value
//! - `GET /api/store/get` - Retrieve a value
//! - `DELETE /api/store/delete` - Delete a key
//! - `GET /api/store/exists` - Check key existence
//! - `GET /api/store/ttl` - Inspect remaining lifetime
//! - `POST /api/store/expire` - Set an expiration
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
