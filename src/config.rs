//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

/// Which key-value backend the gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Remote Redis instance
    Redis,
    /// In-process store, for local runs without Redis
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// How values are serialized before they reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    /// Raw UTF-8 strings
    Text,
    /// JSON documents
    Json,
}

impl FromStr for CodecKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(CodecKind::Text),
            "json" => Ok(CodecKind::Json),
            other => Err(format!("unknown value codec '{}'", other)),
        }
    }
}

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Backend selection
    pub backend: StoreBackend,
    /// Redis host name
    pub redis_host: String,
    /// Redis port
    pub redis_port: u16,
    /// Optional ACL user name
    pub redis_username: Option<String>,
    /// Optional password
    pub redis_password: Option<String>,
    /// Logical database index
    pub redis_db: i64,
    /// Connection establishment timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Per-command response timeout in milliseconds
    pub response_timeout_ms: u64,
    /// Reconnect attempts performed by the Redis client
    pub reconnect_retries: usize,
    /// Value serialization
    pub codec: CodecKind,
    /// Memory backend expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

/// Reads and parses an environment variable, falling back to `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Reads an environment variable, treating empty values as unset.
fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `REDIS_HOST` / `REDIS_PORT` - Redis address (default: 127.0.0.1:6379)
    /// - `REDIS_USERNAME` / `REDIS_PASSWORD` - optional credentials
    /// - `REDIS_DB` - logical database (default: 0)
    /// - `REDIS_CONNECT_TIMEOUT_MS` - connect timeout (default: 2000)
    /// - `REDIS_RESPONSE_TIMEOUT_MS` - command timeout (default: 2000)
    /// - `REDIS_RECONNECT_RETRIES` - client reconnect attempts (default: 3)
    /// - `VALUE_CODEC` - `text` or `json` (default: text)
    /// - `CLEANUP_INTERVAL` - memory backend sweep in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            backend: env_or("STORE_BACKEND", defaults.backend),
            redis_host: env_opt("REDIS_HOST").unwrap_or(defaults.redis_host),
            redis_port: env_or("REDIS_PORT", defaults.redis_port),
            redis_username: env_opt("REDIS_USERNAME"),
            redis_password: env_opt("REDIS_PASSWORD"),
            redis_db: env_or("REDIS_DB", defaults.redis_db),
            connect_timeout_ms: env_or("REDIS_CONNECT_TIMEOUT_MS", defaults.connect_timeout_ms),
            response_timeout_ms: env_or("REDIS_RESPONSE_TIMEOUT_MS", defaults.response_timeout_ms),
            reconnect_retries: env_or("REDIS_RECONNECT_RETRIES", defaults.reconnect_retries),
            codec: env_or("VALUE_CODEC", defaults.codec),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Redis connection settings, with credentials passed as-is.
    ///
    /// Built field by field rather than as a URL so passwords containing
    /// `/`, `#`, `@` or `%` need no escaping.
    pub fn redis_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.redis_host.clone(), self.redis_port),
            redis: RedisConnectionInfo {
                db: self.redis_db,
                username: self.redis_username.clone(),
                password: self.redis_password.clone(),
                ..RedisConnectionInfo::default()
            },
        }
    }

    /// Connection establishment timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Per-command response timeout.
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            backend: StoreBackend::Redis,
            redis_host: "127.0.0.1".to_string(),
            redis_port: 6379,
            redis_username: None,
            redis_password: None,
            redis_db: 0,
            connect_timeout_ms: 2000,
            response_timeout_ms: 2000,
            reconnect_retries: 3,
            codec: CodecKind::Text,
            cleanup_interval: 1,
        }
    }
}
