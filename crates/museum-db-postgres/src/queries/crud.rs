//! Create, read, update and delete queries for the `museums` table.

use museum_storage::{Museum, MuseumInput, Page, PageRequest, StorageError};
use sqlx_core::query::query;
use sqlx_core::query_as::query_as;
use sqlx_core::query_scalar::query_scalar;
use sqlx_postgres::PgPool;
use tracing::instrument;

use crate::error::{PG_FOREIGN_KEY_VIOLATION, has_pg_error_code, is_unique_violation, storage_error};

type MuseumRow = (i64, String, Option<String>);

fn to_museum((id, name, location): MuseumRow) -> Museum {
    Museum { id, name, location }
}

/// Maps a write failure, turning constraint violations into contract errors.
fn write_error(err: sqlx_core::error::Error, name: &str, action: &str) -> StorageError {
    if is_unique_violation(&err) {
        StorageError::already_exists("Museum", name)
    } else {
        storage_error(err, action)
    }
}

fn delete_error(err: sqlx_core::error::Error) -> StorageError {
    if has_pg_error_code(&err, PG_FOREIGN_KEY_VIOLATION) {
        StorageError::internal(format!("Museum is still referenced by paintings: {err}"))
    } else {
        storage_error(err, "delete museum")
    }
}

/// Reads one page of museums ordered by name, plus the total count.
///
/// Names compare byte-wise, independent of the database collation.
#[instrument(skip(pool))]
pub async fn list(pool: &PgPool, request: &PageRequest) -> Result<Page<Museum>, StorageError> {
    let total: i64 = query_scalar("SELECT COUNT(*) FROM museums")
        .fetch_one(pool)
        .await
        .map_err(|e| storage_error(e, "count museums"))?;

    let offset = i64::try_from(request.offset())
        .map_err(|_| StorageError::invalid_input("page is out of range"))?;

    let rows: Vec<MuseumRow> = query_as(
        r#"SELECT id, name, location
           FROM museums
           ORDER BY name COLLATE "C" ASC, id ASC
           LIMIT $1 OFFSET $2"#,
    )
    .bind(i64::from(request.limit()))
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|e| storage_error(e, "list museums"))?;

    let content = rows.into_iter().map(to_museum).collect();
    Ok(Page::new(content, total.max(0) as u64, request))
}

/// Reads a museum by ID.
#[instrument(skip(pool))]
pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Museum>, StorageError> {
    let row: Option<MuseumRow> = query_as("SELECT id, name, location FROM museums WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| storage_error(e, "read museum"))?;

    Ok(row.map(to_museum))
}

/// Checks whether a museum exists.
pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, StorageError> {
    query_scalar("SELECT EXISTS (SELECT 1 FROM museums WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| storage_error(e, "read museum"))
}

/// Inserts a museum and returns the stored row.
#[instrument(skip(pool, input), fields(name = %input.name))]
pub async fn create(pool: &PgPool, input: &MuseumInput) -> Result<Museum, StorageError> {
    let row: MuseumRow = query_as(
        r#"INSERT INTO museums (name, location)
           VALUES ($1, $2)
           RETURNING id, name, location"#,
    )
    .bind(&input.name)
    .bind(&input.location)
    .fetch_one(pool)
    .await
    .map_err(|e| write_error(e, &input.name, "create museum"))?;

    Ok(to_museum(row))
}

/// Overwrites name and location of an existing museum.
#[instrument(skip(pool, input), fields(name = %input.name))]
pub async fn update(pool: &PgPool, id: i64, input: &MuseumInput) -> Result<Museum, StorageError> {
    let row: Option<MuseumRow> = query_as(
        r#"UPDATE museums
           SET name = $2, location = $3
           WHERE id = $1
           RETURNING id, name, location"#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.location)
    .fetch_optional(pool)
    .await
    .map_err(|e| write_error(e, &input.name, "update museum"))?;

    row.map(to_museum)
        .ok_or_else(|| StorageError::not_found("Museum", id))
}

/// Deletes a museum. Returns `true` if a row was removed.
#[instrument(skip(pool))]
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, StorageError> {
    let result = query("DELETE FROM museums WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(delete_error)?;

    Ok(result.rows_affected() > 0)
}

/// Deletes every listed museum in one statement; unknown IDs are ignored.
#[instrument(skip(pool, ids), fields(count = ids.len()))]
pub async fn delete_many(pool: &PgPool, ids: &[i64]) -> Result<u64, StorageError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let result = query("DELETE FROM museums WHERE id = ANY($1)")
        .bind(ids.to_vec())
        .execute(pool)
        .await
        .map_err(delete_error)?;

    Ok(result.rows_affected())
}
