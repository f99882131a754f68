//! Request DTOs for the gateway API
//!
//! Defines the query-string parameters accepted by each endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, StoreError};
use crate::store::validate_key;

/// Query parameters carrying only a key (get, delete, exists, ttl).
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    /// The store key
    #[serde(default)]
    pub key: String,
}

impl KeyQuery {
    /// Validates the key.
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.key)
    }
}

/// Query parameters for the SET operation (POST /api/store/set)
///
/// # Fields
/// - `key`: The key to store the value under
/// - `value`: The value to store
/// - `timeout`: Optional expiration in seconds; absent or non-positive means none
#[derive(Debug, Clone, Deserialize)]
pub struct SetQuery {
    /// The store key
    #[serde(default)]
    pub key: String,
    /// The value to store
    pub value: Option<String>,
    /// Optional expiration in seconds
    #[serde(default)]
    pub timeout: Option<i64>,
}

impl SetQuery {
    /// Validates the request data.
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.key)?;
        if self.value.is_none() {
            return Err(StoreError::InvalidArgument(
                "Missing required parameter 'value'".to_string(),
            ));
        }
        Ok(())
    }

    /// Expiration to apply, if the timeout is present and positive.
    pub fn expiration(&self) -> Option<Duration> {
        self.timeout
            .filter(|secs| *secs > 0)
            .map(|secs| Duration::from_secs(secs as u64))
    }
}

/// Query parameters for the EXPIRE operation (POST /api/store/expire)
#[derive(Debug, Clone, Deserialize)]
pub struct ExpireQuery {
    /// The store key
    #[serde(default)]
    pub key: String,
    /// Expiration in seconds, must be positive
    pub timeout: Option<i64>,
}

impl ExpireQuery {
    /// Validates the request and returns the expiration to apply.
    pub fn expiration(&self) -> Result<Duration> {
        validate_key(&self.key)?;
        match self.timeout {
            Some(secs) if secs > 0 => Ok(Duration::from_secs(secs as u64)),
            Some(secs) => Err(StoreError::InvalidDuration(format!(
                "Timeout must be greater than zero, got {}",
                secs
            ))),
            None => Err(StoreError::InvalidArgument(
                "Missing required parameter 'timeout'".to_string(),
            )),
        }
    }
}
