//! The repository trait implemented by every storage backend.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::types::{Museum, MuseumInput, Page, PageRequest, Painting};

/// Persistence contract for museums and their paintings.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single instance
/// can be shared by all request handlers.
///
/// # Example
///
/// ```ignore
/// use museum_storage::{Museum, MuseumStorage, StorageError};
///
/// async fn get(storage: &dyn MuseumStorage, id: i64) -> Result<Museum, StorageError> {
///     storage
///         .find(id)
///         .await?
///         .ok_or_else(|| StorageError::not_found("Museum", id))
/// }
/// ```
#[async_trait]
pub trait MuseumStorage: Send + Sync {
    /// Returns one page of museums ordered by name ascending, ties by id.
    async fn list(&self, request: &PageRequest) -> Result<Page<Museum>, StorageError>;

    /// Reads a museum by ID.
    ///
    /// Returns `None` if the museum does not exist.
    async fn find(&self, id: i64) -> Result<Option<Museum>, StorageError>;

    /// Returns the paintings held by a museum, ordered by ID.
    ///
    /// Returns `None` if the museum does not exist.
    async fn paintings(&self, museum_id: i64) -> Result<Option<Vec<Painting>>, StorageError>;

    /// Persists a new museum and returns it with its generated ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the name is taken.
    async fn create(&self, input: &MuseumInput) -> Result<Museum, StorageError>;

    /// Overwrites the name and location of an existing museum.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the museum does not exist.
    /// Returns `StorageError::AlreadyExists` if the new name is taken.
    async fn update(&self, id: i64, input: &MuseumInput) -> Result<Museum, StorageError>;

    /// Deletes a museum. Returns `true` if a museum was removed.
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;

    /// Deletes every listed museum, skipping IDs that do not exist.
    ///
    /// Returns the number of museums removed.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, StorageError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    /// Returns the name of this storage backend, e.g. "postgres".
    fn backend_name(&self) -> &'static str;
}
