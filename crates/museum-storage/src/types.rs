//! Domain types exchanged between the HTTP layer and storage backends.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Maximum length, in characters, of a museum's name or location.
pub const MAX_FIELD_LEN: usize = 255;

/// A museum as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Museum {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

/// A painting, optionally attached to a museum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Painting {
    pub id: i64,
    pub name: String,
    pub artist_id: Option<i64>,
    pub museum_id: Option<i64>,
    pub year: Option<i32>,
}

/// Writable fields of a museum, used for both create and update.
///
/// Unknown fields in the request body (`id`, `paintings`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumInput {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl MuseumInput {
    /// Creates a new input with the given name and location.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Option<&str>) -> Self {
        Self {
            name: name.into(),
            location: location.map(str::to_owned),
        }
    }

    /// Checks field constraints that do not need the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidInput` if the name is blank or either
    /// field exceeds [`MAX_FIELD_LEN`] characters.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.name.trim().is_empty() {
            return Err(StorageError::invalid_input("name must not be empty"));
        }
        if self.name.chars().count() > MAX_FIELD_LEN {
            return Err(StorageError::invalid_input(format!(
                "name must be at most {MAX_FIELD_LEN} characters"
            )));
        }
        if let Some(location) = &self.location
            && location.chars().count() > MAX_FIELD_LEN
        {
            return Err(StorageError::invalid_input(format!(
                "location must be at most {MAX_FIELD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Reference to a museum inside a bulk delete body. Only `id` is read;
/// a museum that was never saved has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumRef {
    #[serde(default)]
    pub id: Option<i64>,
}

/// A zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidInput` if `limit` is zero.
    pub fn new(page: u32, limit: u32) -> Result<Self, StorageError> {
        if limit == 0 {
            return Err(StorageError::invalid_input("limit must be at least 1"));
        }
        Ok(Self { page, limit })
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }
}

/// One page of results together with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Builds a page from its content, the total row count and the request
    /// that produced it.
    #[must_use]
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.limit));
        let number_of_elements = content.len();
        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.limit,
            number_of_elements,
            first: request.page == 0,
            last: u64::from(request.page) + 1 >= total_pages,
        }
    }
}
