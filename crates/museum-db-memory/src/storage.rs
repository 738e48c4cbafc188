use std::collections::BTreeMap;

use async_trait::async_trait;
use museum_storage::{
    Museum, MuseumInput, MuseumStorage, Page, PageRequest, Painting, StorageError,
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    museums: BTreeMap<i64, Museum>,
    paintings: BTreeMap<i64, Painting>,
    museum_seq: i64,
    painting_seq: i64,
}

impl Tables {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.museums
            .values()
            .any(|m| m.name == name && Some(m.id) != except)
    }

    fn is_referenced(&self, museum_id: i64) -> bool {
        self.paintings
            .values()
            .any(|p| p.museum_id == Some(museum_id))
    }
}

/// In-memory museum storage.
///
/// Every write takes the write lock for its whole duration, so the
/// unique-name check and the insert happen atomically.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    tables: RwLock<Tables>,
}

impl InMemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a painting and returns it with its generated ID.
    ///
    /// Paintings are not managed through the museum API; this exists to
    /// seed data for local runs and tests.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if `museum_id` names a missing museum.
    pub async fn add_painting(
        &self,
        name: impl Into<String>,
        artist_id: Option<i64>,
        museum_id: Option<i64>,
        year: Option<i32>,
    ) -> Result<Painting, StorageError> {
        let mut tables = self.tables.write().await;
        if let Some(id) = museum_id
            && !tables.museums.contains_key(&id)
        {
            return Err(StorageError::not_found("Museum", id));
        }
        tables.painting_seq += 1;
        let painting = Painting {
            id: tables.painting_seq,
            name: name.into(),
            artist_id,
            museum_id,
            year,
        };
        tables.paintings.insert(painting.id, painting.clone());
        Ok(painting)
    }
}

fn referenced_error(id: i64) -> StorageError {
    StorageError::internal(format!("museum {id} is still referenced by paintings"))
}

#[async_trait]
impl MuseumStorage for InMemoryStorage {
    async fn list(&self, request: &PageRequest) -> Result<Page<Museum>, StorageError> {
        let tables = self.tables.read().await;
        let mut all: Vec<&Museum> = tables.museums.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = all
            .into_iter()
            .skip(offset)
            .take(request.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, tables.museums.len() as u64, request))
    }

    async fn find(&self, id: i64) -> Result<Option<Museum>, StorageError> {
        Ok(self.tables.read().await.museums.get(&id).cloned())
    }

    async fn paintings(&self, museum_id: i64) -> Result<Option<Vec<Painting>>, StorageError> {
        let tables = self.tables.read().await;
        if !tables.museums.contains_key(&museum_id) {
            return Ok(None);
        }
        let paintings = tables
            .paintings
            .values()
            .filter(|p| p.museum_id == Some(museum_id))
            .cloned()
            .collect();
        Ok(Some(paintings))
    }

    async fn create(&self, input: &MuseumInput) -> Result<Museum, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.name_taken(&input.name, None) {
            return Err(StorageError::already_exists("Museum", &input.name));
        }
        tables.museum_seq += 1;
        let museum = Museum {
            id: tables.museum_seq,
            name: input.name.clone(),
            location: input.location.clone(),
        };
        tables.museums.insert(museum.id, museum.clone());
        tracing::debug!(id = museum.id, "museum created");
        Ok(museum)
    }

    async fn update(&self, id: i64, input: &MuseumInput) -> Result<Museum, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.museums.contains_key(&id) {
            return Err(StorageError::not_found("Museum", id));
        }
        if tables.name_taken(&input.name, Some(id)) {
            return Err(StorageError::already_exists("Museum", &input.name));
        }
        let museum = Museum {
            id,
            name: input.name.clone(),
            location: input.location.clone(),
        };
        tables.museums.insert(id, museum.clone());
        Ok(museum)
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.is_referenced(id) {
            return Err(referenced_error(id));
        }
        Ok(tables.museums.remove(&id).is_some())
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, StorageError> {
        let mut tables = self.tables.write().await;
        // All-or-nothing, like the single DELETE statement in PostgreSQL.
        if let Some(&id) = ids.iter().find(|&&id| tables.is_referenced(id)) {
            return Err(referenced_error(id));
        }
        let removed = ids
            .iter()
            .filter(|&&id| tables.museums.remove(&id).is_some())
            .count();
        Ok(removed as u64)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
