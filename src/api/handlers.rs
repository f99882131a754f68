//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers only parse,
//! validate and forward; all storage happens behind [`KvStore`].

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    DeleteResponse, ExistsResponse, ExpireQuery, ExpireResponse, GetResponse, HealthResponse,
    KeyQuery, SetQuery, SetResponse, TtlResponse,
};
use crate::store::{KvStore, TextCodec, ValueCodec};

/// Application state shared across all handlers.
///
/// Holds the store and value codec, both constructed at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Key-value backend
    pub store: Arc<dyn KvStore>,
    /// Value (de)serialization
    pub codec: Arc<dyn ValueCodec>,
}

impl AppState {
    /// Creates a new AppState from a store and codec.
    pub fn new(store: Arc<dyn KvStore>, codec: Arc<dyn ValueCodec>) -> Self {
        Self { store, codec }
    }

    /// Creates a new AppState over `store` using the text codec.
    pub fn with_store(store: impl KvStore) -> Self {
        Self::new(Arc::new(store), Arc::new(TextCodec))
    }
}

/// Handler for POST /api/store/set
///
/// Stores a value, with an expiration when `timeout` is a positive number of seconds.
pub async fn set_handler(
    State(state): State<AppState>,
    Query(req): Query<SetQuery>,
) -> Result<Json<SetResponse>> {
    req.validate()?;
    let expiration = req.expiration();
    let SetQuery { key, value, .. } = req;

    let bytes = state.codec.encode(&Value::String(value.unwrap_or_default()))?;

    match expiration {
        Some(ttl) => {
            debug!("set key={} ttl={}s", key, ttl.as_secs());
            state.store.set_with_ttl(&key, bytes, ttl).await?;
        }
        None => {
            debug!("set key={}", key);
            state.store.set(&key, bytes).await?;
        }
    }

    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /api/store/get
pub async fn get_handler(
    State(state): State<AppState>,
    Query(req): Query<KeyQuery>,
) -> Result<Json<GetResponse>> {
    req.validate()?;
    debug!("get key={}", req.key);

    let response = match state.store.get(&req.key).await? {
        Some(bytes) => GetResponse::found(req.key, state.codec.decode(&bytes)?),
        None => GetResponse::not_found(req.key),
    };

    Ok(Json(response))
}

/// Handler for DELETE /api/store/delete
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(req): Query<KeyQuery>,
) -> Result<Json<DeleteResponse>> {
    req.validate()?;
    debug!("delete key={}", req.key);

    let deleted = state.store.delete(&req.key).await?;

    Ok(Json(DeleteResponse::new(req.key, deleted)))
}

/// Handler for GET /api/store/exists
pub async fn exists_handler(
    State(state): State<AppState>,
    Query(req): Query<KeyQuery>,
) -> Result<Json<ExistsResponse>> {
    req.validate()?;
    debug!("exists key={}", req.key);

    let exists = state.store.exists(&req.key).await?;

    Ok(Json(ExistsResponse::new(req.key, exists)))
}

/// Handler for GET /api/store/ttl
///
/// Reports `-2` for absent keys, `-1` for keys without expiration,
/// otherwise the remaining seconds.
pub async fn ttl_handler(
    State(state): State<AppState>,
    Query(req): Query<KeyQuery>,
) -> Result<Json<TtlResponse>> {
    req.validate()?;
    debug!("ttl key={}", req.key);

    let ttl = state.store.ttl(&req.key).await?;

    Ok(Json(TtlResponse::new(req.key, ttl)))
}

/// Handler for POST /api/store/expire
pub async fn expire_handler(
    State(state): State<AppState>,
    Query(req): Query<ExpireQuery>,
) -> Result<Json<ExpireResponse>> {
    let ttl = req.expiration()?;
    debug!("expire key={} ttl={}s", req.key, ttl.as_secs());

    let updated = state.store.expire(&req.key, ttl).await?;

    Ok(Json(ExpireResponse::new(req.key, updated)))
}

/// Handler for GET /health
///
/// Pings the backing store; an unreachable store surfaces as 503.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.store.ping().await?;
    Ok(Json(HealthResponse::healthy(state.store.backend_name())))
}
