//! Connection pool for the museum database.

use sqlx_core::pool::PoolOptions;
use sqlx_core::query::query;
use sqlx_postgres::{PgPool, Postgres};
use tracing::{info, instrument};

use crate::config::PostgresConfig;
use crate::error::{PostgresError, Result};

/// Opens a pool sized and timed according to `config`.
#[instrument(skip_all, fields(url = %redact_url(&config.url)))]
pub(crate) async fn connect(config: &PostgresConfig) -> Result<PgPool> {
    if config.max_connections == 0 {
        return Err(PostgresError::config("max_connections must be at least 1"));
    }

    let pool = PoolOptions::<Postgres>::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "PostgreSQL pool ready");
    Ok(pool)
}

/// Round-trips a trivial statement to prove the database answers.
pub(crate) async fn ping(pool: &PgPool) -> Result<()> {
    query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Replaces the password of a connection URL with `***`.
fn redact_url(url: &str) -> String {
    let (scheme, rest) = url.split_once("://").unwrap_or(("", url));
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_owned();
    };
    match userinfo.split_once(':') {
        Some((user, _)) if scheme.is_empty() => format!("{user}:***@{host}"),
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_url() {
        assert_eq!(
            redact_url("postgres://museum:s3cr@t@db:5432/museums"),
            "postgres://museum:***@db:5432/museums"
        );
        assert_eq!(redact_url("postgres://db/museums"), "postgres://db/museums");
        assert_eq!(
            redact_url("postgres://museum@db/museums"),
            "postgres://museum@db/museums"
        );
    }
}
