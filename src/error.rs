//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for store operations and HTTP handlers.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing or malformed request argument (e.g. empty key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Expiration duration that the store cannot honor
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Store could not be reached or did not answer in time
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Store answered with an error reply
    #[error("Store failure: {0}")]
    StoreFailure(String),

    /// Stored bytes could not be encoded or decoded
    #[error("Codec error: {0}")]
    Codec(String),
}

// == Redis Error Conversion ==
impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error()
            || err.is_timeout()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
        {
            StoreError::StoreUnavailable(err.to_string())
        } else {
            StoreError::StoreFailure(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            StoreError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            StoreError::InvalidDuration(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            StoreError::StoreUnavailable(detail) => {
                error!("Key-value store unavailable: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Key-value store unavailable".to_string(),
                )
            }
            StoreError::StoreFailure(detail) => {
                error!("Key-value store failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Key-value store failure".to_string(),
                )
            }
            StoreError::Codec(detail) => {
                error!("Value codec error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Stored value could not be decoded".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, StoreError>;
