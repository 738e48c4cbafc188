//! PostgreSQL implementation of the `MuseumStorage` trait.

use async_trait::async_trait;
use sqlx_postgres::PgPool;

use museum_storage::{
    Museum, MuseumInput, MuseumStorage, Page, PageRequest, Painting, StorageError,
};

use crate::config::PostgresConfig;
use crate::migrations;
use crate::pool;
use crate::queries::{crud, paintings};

/// PostgreSQL storage backend for museums.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Creates a new `PostgresStorage` with the given configuration.
    ///
    /// This will:
    /// 1. Create a connection pool
    /// 2. Run migrations (if configured)
    ///
    /// # Errors
    ///
    /// Returns an error if the connection pool cannot be created
    /// or if migrations fail.
    pub async fn new(config: PostgresConfig) -> Result<Self, StorageError> {
        let pool = pool::connect(&config).await?;

        if config.run_migrations {
            migrations::run(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MuseumStorage for PostgresStorage {
    async fn list(&self, request: &PageRequest) -> Result<Page<Museum>, StorageError> {
        crud::list(&self.pool, request).await
    }

    async fn find(&self, id: i64) -> Result<Option<Museum>, StorageError> {
        crud::find(&self.pool, id).await
    }

    async fn paintings(&self, museum_id: i64) -> Result<Option<Vec<Painting>>, StorageError> {
        if !crud::exists(&self.pool, museum_id).await? {
            return Ok(None);
        }
        paintings::by_museum(&self.pool, museum_id).await.map(Some)
    }

    async fn create(&self, input: &MuseumInput) -> Result<Museum, StorageError> {
        crud::create(&self.pool, input).await
    }

    async fn update(&self, id: i64, input: &MuseumInput) -> Result<Museum, StorageError> {
        crud::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        crud::delete(&self.pool, id).await
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, StorageError> {
        crud::delete_many(&self.pool, ids).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        pool::ping(&self.pool).await.map_err(Into::into)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
