//! Store Entry Module
//!
//! Defines the structure for entries held by the in-memory backend.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::Ttl;

// == Store Entry ==
/// A stored value with its optional expiration deadline.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The encoded value
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new entry expiring after `ttl_seconds`, or never if `None`.
    pub fn new(value: Vec<u8>, ttl_seconds: Option<u64>) -> Self {
        let expires_at = ttl_seconds.map(|ttl| deadline_after(ttl));
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Same as [`is_expired`](Self::is_expired) against a fixed clock reading.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }

    // == Expire ==
    /// Replaces the deadline with one `ttl_seconds` from now.
    pub fn expire_in(&mut self, ttl_seconds: u64) {
        self.expires_at = Some(deadline_after(ttl_seconds));
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(current_timestamp_ms()))
    }

    /// Returns the remaining lifetime using the store's TTL convention.
    ///
    /// Seconds are rounded to the nearest whole second, as Redis does.
    pub fn ttl(&self) -> Ttl {
        match self.ttl_remaining_ms() {
            Some(ms) => Ttl::Expires((ms + 500) / 1000),
            None => Ttl::Persistent,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn deadline_after(ttl_seconds: u64) -> u64 {
    current_timestamp_ms().saturating_add(ttl_seconds.saturating_mul(1000))
}
