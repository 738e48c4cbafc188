pub mod museums;

use axum::Router;

use crate::server::AppState;

/// Routes served under `/api/v1`.
pub fn api_v1() -> Router<AppState> {
    Router::new().merge(museums::router())
}
