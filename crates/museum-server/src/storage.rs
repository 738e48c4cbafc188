//! Storage backend selection.

use std::sync::Arc;

use anyhow::Context;
use museum_db_memory::InMemoryStorage;
use museum_db_postgres::PostgresStorage;
use museum_storage::DynStorage;

use crate::config::{StorageBackend, StorageConfig};

/// Creates the storage backend named by `config.backend`.
pub async fn create_storage(config: &StorageConfig) -> anyhow::Result<DynStorage> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryStorage::new()))
        }
        StorageBackend::Postgres => {
            let pg = config
                .postgres
                .as_ref()
                .context("storage.postgres config is required for the postgres backend")?;
            let storage = PostgresStorage::new(pg.to_postgres_config())
                .await
                .context("failed to initialize PostgreSQL storage")?;
            tracing::info!(
                host = %pg.host,
                database = %pg.database,
                pool_size = pg.pool_size,
                "PostgreSQL storage ready"
            );
            Ok(Arc::new(storage))
        }
    }
}
