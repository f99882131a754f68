//! Store Module
//!
//! Key-value access layer: the `KvStore` trait plus its Redis and in-memory
//! backends, and the codecs that turn request values into stored bytes.

mod codec;
mod entry;
mod memory;
mod redis_store;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, StoreError};

// Re-export public types
pub use redis_store::RedisStore;
pub use codec::{codec_for, JsonCodec, TextCodec, ValueCodec};
pub use entry::StoreEntry;
pub use memory::MemoryStore;

// == Public Constants ==
/// Longest accepted expiration in seconds (100 years).
///
/// Redis rejects expirations whose absolute deadline overflows a signed
/// millisecond timestamp; this bound keeps both backends well inside it.
pub const MAX_EXPIRE_SECONDS: u64 = 100 * 365 * 24 * 60 * 60;

// == Ttl ==
/// Remaining lifetime of a key, following the store's three-state convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Key does not exist (`-2`)
    Missing,
    /// Key exists without an expiration (`-1`)
    Persistent,
    /// Key expires in this many seconds
    Expires(u64),
}

impl Ttl {
    /// Builds a Ttl from the raw signed reply of a `TTL` command.
    pub fn from_seconds(raw: i64) -> Self {
        match raw {
            -1 => Ttl::Persistent,
            n if n < 0 => Ttl::Missing,
            n => Ttl::Expires(n as u64),
        }
    }

    /// Returns the raw signed representation (`-2`, `-1` or remaining seconds).
    pub fn as_seconds(&self) -> i64 {
        match self {
            Ttl::Missing => -2,
            Ttl::Persistent => -1,
            Ttl::Expires(secs) => *secs as i64,
        }
    }
}

// == KvStore Trait ==
/// Expiring key-value access interface.
///
/// Implementations forward to a backing store and translate its null and
/// sentinel replies into typed results. No operation retries.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Stores `value` under `key`, replacing any entry and its expiration.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Stores `value` under `key` expiring after `ttl`.
    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Fetches the value, `None` if the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Removes the key, returning whether anything was removed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Reports whether the key currently exists.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Reports the remaining lifetime of the key.
    async fn ttl(&self, key: &str) -> Result<Ttl>;

    /// Sets an expiration on an existing key; `false` if the key is absent.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Round-trips to the store to confirm it is reachable.
    async fn ping(&self) -> Result<()>;

    /// Short backend name for health reporting.
    fn backend_name(&self) -> &'static str;
}

// == Validation Helpers ==
/// Rejects empty keys.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidArgument("Key cannot be empty".to_string()));
    }
    Ok(())
}

/// Converts a duration into whole seconds, rounding partial seconds up.
///
/// Zero durations and durations above [`MAX_EXPIRE_SECONDS`] are rejected.
pub fn ttl_seconds(ttl: Duration) -> Result<u64> {
    if ttl.is_zero() {
        return Err(StoreError::InvalidDuration(
            "Expiration must be greater than zero".to_string(),
        ));
    }
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    if secs > MAX_EXPIRE_SECONDS {
        return Err(StoreError::InvalidDuration(format!(
            "Expiration of {} seconds exceeds maximum of {} seconds",
            secs, MAX_EXPIRE_SECONDS
        )));
    }
    Ok(secs)
}
