//! In-memory storage backend for the museum API.
//!
//! Implements [`museum_storage::MuseumStorage`] over ordered maps guarded by
//! a single `tokio::sync::RwLock`. Name uniqueness, byte-wise name ordering
//! and paging behave like the PostgreSQL backend, which makes this backend
//! suitable for local runs and HTTP tests that should not need a database.
//!
//! ```ignore
//! use museum_db_memory::InMemoryStorage;
//! use museum_storage::{MuseumInput, MuseumStorage};
//!
//! let storage = InMemoryStorage::new();
//! let louvre = storage.create(&MuseumInput::new("Louvre", Some("Paris"))).await?;
//! ```

mod storage;

pub use storage::InMemoryStorage;
