//! Museum CRUD endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use museum_storage::{Museum, MuseumInput, MuseumRef, Page, PageRequest, Painting, StorageError};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/museums", get(list_museums).post(create_museum))
        .route(
            "/museums/{id}",
            get(get_museum).put(update_museum).delete(delete_museum),
        )
        .route("/museums/{id}/paintings", get(list_paintings))
        .route("/deletemuseums", post(delete_museums))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

pub async fn list_museums(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<Page<Museum>>> {
    let max = state.config.pagination.max_limit;
    if params.limit == 0 || params.limit > max {
        return Err(ApiError::bad_request(format!(
            "limit must be between 1 and {max}"
        )));
    }
    let request = PageRequest::new(params.page, params.limit)?;
    let page = state.storage.list(&request).await?;
    Ok(Json(page))
}

pub async fn get_museum(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Museum>> {
    let museum = state
        .storage
        .find(id)
        .await?
        .ok_or_else(|| StorageError::not_found("Museum", id))?;
    Ok(Json(museum))
}

/// Paintings of a museum; an unknown museum yields an empty list.
pub async fn list_paintings(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Vec<Painting>>> {
    let paintings = state.storage.paintings(id).await?.unwrap_or_default();
    Ok(Json(paintings))
}

pub async fn create_museum(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MuseumInput>,
) -> ApiResult<Json<Museum>> {
    input.validate()?;
    let museum = state.storage.create(&input).await?;
    tracing::info!(id = museum.id, name = %museum.name, "museum created");
    Ok(Json(museum))
}

pub async fn update_museum(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<MuseumInput>,
) -> ApiResult<Json<Museum>> {
    // Body checks come first, so a bad body on an unknown id is a 400.
    input.validate()?;
    let museum = state.storage.update(id, &input).await?;
    tracing::info!(id, "museum updated");
    Ok(Json(museum))
}

/// Deletes every listed museum that has an id; unsaved or unknown ones are
/// skipped.
pub async fn delete_museums(
    State(state): State<AppState>,
    ApiJson(museums): ApiJson<Vec<MuseumRef>>,
) -> ApiResult<StatusCode> {
    let ids: Vec<i64> = museums.iter().filter_map(|m| m.id).collect();
    let removed = state.storage.delete_many(&ids).await?;
    tracing::info!(requested = ids.len(), removed, "museums deleted");
    Ok(StatusCode::OK)
}

pub async fn delete_museum(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.storage.delete(id).await?;
    if deleted {
        tracing::info!(id, "museum deleted");
    }
    Ok(Json(DeleteResponse { deleted }))
}
