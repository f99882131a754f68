//! KV Gateway - HTTP access to a Redis key-value store
//!
//! Binary entry point: loads configuration, connects the backend and serves
//! the REST API until SIGINT/SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kv_gateway::config::{Config, StoreBackend};
use kv_gateway::store::{codec_for, KvStore, MemoryStore, RedisStore};
use kv_gateway::{create_router, spawn_cleanup_task, AppState};

/// Main entry point for the gateway.
///
/// # Startup Sequence
/// 1. Load `.env` if present and initialize tracing
/// 2. Load configuration from environment variables
/// 3. Connect the configured backend
/// 4. Create Axum router with all endpoints
/// 5. Serve until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kv_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KV Gateway");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={:?}, codec={:?}, port={}",
        config.backend, config.codec, config.server_port
    );

    let (store, cleanup_handle) = build_store(&config).await?;
    let state = AppState::new(store, codec_for(config.codec));

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Connects the configured backend.
///
/// The memory backend also gets its expiry sweep, returned so shutdown can stop it.
async fn build_store(
    config: &Config,
) -> anyhow::Result<(Arc<dyn KvStore>, Option<JoinHandle<()>>)> {
    match config.backend {
        StoreBackend::Redis => {
            info!(
                "Connecting to Redis at {}:{} (db {})",
                config.redis_host, config.redis_port, config.redis_db
            );
            let store = RedisStore::connect(config)
                .await
                .context("failed to connect to Redis")?;
            info!("Redis connection established");
            let store: Arc<dyn KvStore> = Arc::new(store);
            Ok((store, None))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory backend; data is lost on restart");
            let store = MemoryStore::new();
            let handle = spawn_cleanup_task(store.clone(), config.cleanup_interval);
            let store: Arc<dyn KvStore> = Arc::new(store);
            Ok((store, Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the expiry sweep if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Expiry sweep aborted");
    }
}
