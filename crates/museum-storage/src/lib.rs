//! # museum-storage
//!
//! Repository abstraction for the museum API.
//!
//! This crate defines the domain types and the [`MuseumStorage`] trait that
//! every storage backend implements. It contains no implementations; those
//! live in `museum-db-postgres` and `museum-db-memory`.
//!
//! ## Example
//!
//! ```ignore
//! use museum_storage::{MuseumStorage, PageRequest, StorageError};
//!
//! async fn first_page(storage: &dyn MuseumStorage) -> Result<(), StorageError> {
//!     let page = storage.list(&PageRequest::new(0, 10)?).await?;
//!     for museum in page.content {
//!         println!("{}", museum.name);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use traits::MuseumStorage;
pub use types::{
    MAX_FIELD_LEN, Museum, MuseumInput, MuseumRef, Page, PageRequest, Painting,
};

/// Type alias for a shareable storage trait object.
pub type DynStorage = std::sync::Arc<dyn MuseumStorage>;
