//! In-Memory Store Module
//!
//! Process-local backend with the same semantics as the Redis backend.
//! Expired entries are hidden on read and removed by the background sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::entry::current_timestamp_ms;
use crate::store::{ttl_seconds, validate_key, KvStore, StoreEntry, Ttl};

// == Memory Store ==
/// In-process key-value store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, StoreEntry>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    /// Number of entries held, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Looks up a live entry, dropping it first if it has expired.
fn live_entry<'a>(
    entries: &'a mut HashMap<String, StoreEntry>,
    key: &str,
) -> Option<&'a mut StoreEntry> {
    if entries.get(key).is_some_and(StoreEntry::is_expired) {
        entries.remove(key);
    }
    entries.get_mut(key)
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        validate_key(key)?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoreEntry::new(value, None));
        Ok(())
    }

    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        validate_key(key)?;
        let secs = ttl_seconds(ttl)?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoreEntry::new(value, Some(secs)));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let mut entries = self.entries.write().await;
        Ok(live_entry(&mut entries, key).map(|entry| entry.value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let mut entries = self.entries.write().await;
        Ok(entries
            .remove(key)
            .is_some_and(|entry| !entry.is_expired()))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let mut entries = self.entries.write().await;
        Ok(live_entry(&mut entries, key).is_some())
    }

    async fn ttl(&self, key: &str) -> Result<Ttl> {
        validate_key(key)?;
        let mut entries = self.entries.write().await;
        Ok(live_entry(&mut entries, key)
            .map(|entry| entry.ttl())
            .unwrap_or(Ttl::Missing))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        validate_key(key)?;
        let secs = ttl_seconds(ttl)?;
        let mut entries = self.entries.write().await;
        match live_entry(&mut entries, key) {
            Some(entry) => {
                entry.expire_in(secs);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
