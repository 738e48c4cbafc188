//! Read queries for the `paintings` table.

use museum_storage::{Painting, StorageError};
use sqlx_core::query_as::query_as;
use sqlx_postgres::PgPool;

use crate::error::storage_error;

type PaintingRow = (i64, String, Option<i64>, Option<i64>, Option<i32>);

/// Lists the paintings held by a museum, ordered by ID.
pub async fn by_museum(pool: &PgPool, museum_id: i64) -> Result<Vec<Painting>, StorageError> {
    let rows: Vec<PaintingRow> = query_as(
        r#"SELECT id, name, artist_id, museum_id, year
           FROM paintings
           WHERE museum_id = $1
           ORDER BY id"#,
    )
    .bind(museum_id)
    .fetch_all(pool)
    .await
    .map_err(|e| storage_error(e, "list paintings"))?;

    Ok(rows
        .into_iter()
        .map(|(id, name, artist_id, museum_id, year)| Painting {
            id,
            name,
            artist_id,
            museum_id,
            year,
        })
        .collect())
}
