pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod storage;

pub use config::{
    AppConfig, LoggingConfig, PaginationConfig, PostgresStorageConfig, ServerConfig,
    StorageBackend, StorageConfig,
};
pub use error::{ApiError, ApiResult};
pub use observability::init_tracing;
pub use server::{AppState, MuseumServer, ServerBuilder, build_app, build_router};
