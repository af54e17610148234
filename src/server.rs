//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, cache and id sequence setup, and the Axum server
//! lifecycle including graceful shutdown.

use crate::config::Config;
use crate::domain::id_sequence::IdSequence;
use crate::infrastructure::cache::MemoryCache;
use crate::infrastructure::persistence::{MongoRecordRepository, RecordStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB connection (or cache-only mode when unreachable or disabled)
/// - Id sequence seeded past the highest stored id
/// - In-process record cache
/// - Axum HTTP server with graceful shutdown
///
/// The store connection is released once the server has drained.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
///
/// An unreachable store is not an error.
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await;

    let store = match &repository {
        Some(repo) => RecordStore::new(Arc::new(repo.clone()), config.store_timeout()),
        None => RecordStore::disabled(),
    };

    let ids = Arc::new(seed_id_sequence(&store).await);
    let cache = Arc::new(MemoryCache::new());

    let state = AppState::new(cache, store, ids, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(repo) = repository {
        repo.shutdown().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Attempts the store connection within the configured connect timeout.
///
/// Returns `None` when the store is disabled, unreachable or too slow; the
/// server then runs from the cache alone and shortened URLs do not survive
/// a restart.
async fn connect_store(config: &Config) -> Option<MongoRecordRepository> {
    if config.store_disabled {
        tracing::info!("Record store disabled, serving from cache only");
        return None;
    }

    let connect = MongoRecordRepository::connect(
        &config.mongo_uri,
        &config.mongo_db,
        &config.mongo_collection,
        config.store_timeout(),
    );

    match tokio::time::timeout(config.store_connect_timeout(), connect).await {
        Ok(Ok(repo)) => Some(repo),
        Ok(Err(e)) => {
            tracing::warn!("MongoDB connection failed: {}. Serving from cache only.", e);
            None
        }
        Err(_) => {
            tracing::warn!(
                "MongoDB connection timed out after {}s. Serving from cache only.",
                config.store_connect_timeout_secs
            );
            None
        }
    }
}

/// Starts ids after the highest persisted id so new records do not reuse ids
/// written by earlier runs.
async fn seed_id_sequence(store: &RecordStore) -> IdSequence {
    if !store.is_available() {
        return IdSequence::default();
    }

    match store.max_id().await {
        Ok(max_id) => {
            let ids = IdSequence::after(max_id);
            tracing::info!("Record ids continue at {}", ids.peek());
            ids
        }
        Err(e) => {
            tracing::warn!("Could not read highest record id: {}. Starting at 1.", e);
            IdSequence::default()
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
