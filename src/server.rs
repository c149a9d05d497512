//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, registry construction and the Axum server lifecycle.

use crate::application::services::LinkRegistry;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::{MemoryMappingRepository, PgMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the storage backend selected by `config`.
///
/// For PostgreSQL this connects the pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn connect_storage(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Storage: in-memory (mappings are lost on restart)");
            Ok(Arc::new(MemoryMappingRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;

            Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
        }
    }
}

/// Builds the registry described by `config` on top of `repository`.
pub fn build_registry(
    config: &Config,
    repository: Arc<dyn MappingRepository>,
) -> LinkRegistry<dyn MappingRepository> {
    LinkRegistry::new(repository, config.base_url.clone())
        .with_key_policy(config.key_length, config.max_key_attempts)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (memory or PostgreSQL with migrations)
/// - Link registry
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Storage setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_storage(&config).await?;
    let registry = build_registry(&config, repository);

    let state = AppState::new(Arc::new(registry));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
