//! Request and Response models for the gateway API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ExpireQuery, KeyQuery, SetQuery};
pub use responses::{
    DeleteResponse, ErrorResponse, ExistsResponse, ExpireResponse, GetResponse, HealthResponse,
    SetResponse, TtlResponse,
};
