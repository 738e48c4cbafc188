//! HTTP error mapping for the museum API.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use museum_storage::StorageError;
use serde_json::json;

/// Errors returned by API handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Messages for
/// unexpected failures are fixed; details only go to the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed path, query string or body.
    #[error("{0}")]
    BadRequest(String),

    /// A repository error.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Status code and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Storage(err) => match err {
                StorageError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                StorageError::AlreadyExists { entity, .. } => {
                    (StatusCode::CONFLICT, format!("{entity} already exists"))
                }
                StorageError::InvalidInput { message } => {
                    (StatusCode::BAD_REQUEST, message.clone())
                }
                StorageError::ConnectionError { .. } => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Storage unavailable".to_string(),
                ),
                StorageError::Internal { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unknown error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            let category = match &self {
                Self::Storage(err) => err.category().to_string(),
                Self::BadRequest(_) => "request".to_string(),
            };
            tracing::error!(error = %self, %category, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
