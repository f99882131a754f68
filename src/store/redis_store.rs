//! Redis Store Module
//!
//! Production backend forwarding every operation to a Redis server over a
//! multiplexed, auto-reconnecting connection.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, IntoConnectionInfo};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::store::{ttl_seconds, validate_key, KvStore, Ttl};

// == Redis Store ==
/// Redis-backed store.
///
/// The connection manager is a cheap handle over one multiplexed connection;
/// each operation clones it, so no lock is held across requests.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Wraps an existing connection manager.
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Connects using the Redis settings from `config`.
    ///
    /// Timeouts and reconnect attempts are delegated to the client's
    /// connection manager; this layer never retries on its own.
    pub async fn connect(config: &Config) -> Result<Self> {
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(config.connect_timeout())
            .set_response_timeout(config.response_timeout())
            .set_number_of_retries(config.reconnect_retries);
        Self::connect_with(config.redis_connection_info(), manager_config).await
    }

    /// Connects to a `redis://` URL with an explicit manager configuration.
    pub async fn connect_url(url: &str, manager_config: ConnectionManagerConfig) -> Result<Self> {
        Self::connect_with(url, manager_config).await
    }

    /// Connects with explicit connection settings and manager configuration.
    ///
    /// Settings the client cannot use are a configuration fault, reported as
    /// `StoreFailure` rather than a client-side argument error.
    pub async fn connect_with<T: IntoConnectionInfo>(
        info: T,
        manager_config: ConnectionManagerConfig,
    ) -> Result<Self> {
        let client = Client::open(info).map_err(|e| {
            StoreError::StoreFailure(format!("Invalid Redis connection settings: {}", e))
        })?;
        let conn = ConnectionManager::new_with_config(client, manager_config).await?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        validate_key(key)?;
        debug!("SET {}", key);
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        validate_key(key)?;
        let secs = ttl_seconds(ttl)?;
        debug!("SET {} EX {}", key, secs);
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, secs).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        debug!("GET {}", key);
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        debug!("DEL {}", key);
        let mut conn = self.conn.clone();
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        debug!("EXISTS {}", key);
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    async fn ttl(&self, key: &str) -> Result<Ttl> {
        validate_key(key)?;
        debug!("TTL {}", key);
        let mut conn = self.conn.clone();
        let raw: i64 = conn.ttl(key).await?;
        Ok(Ttl::from_seconds(raw))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        validate_key(key)?;
        let secs = ttl_seconds(ttl)?;
        debug!("EXPIRE {} {}", key, secs);
        let mut conn = self.conn.clone();
        let updated: bool = conn.expire(key, secs as i64).await?;
        Ok(updated)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
