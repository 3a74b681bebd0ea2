//! Connection pool
//!
//! A process opens exactly one pool from its [`DbConfig`], lends `&PgPool`
//! to every repository and to `seed::run`, and calls `PgPool::close` once on
//! the way out, whether the command succeeded or not.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::DbConfig;

/// Pool size when `STOREFRONT_MAX_CONNECTIONS` is unset.
/// The seed runs one statement at a time; only `get_many` fans out.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open the pool and establish the first connection.
///
/// Fails fast on a malformed URL or an unreachable server, so callers learn
/// about bad settings before any statement is issued.
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    debug!(max_connections = config.max_connections, "opening connection pool");
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -p storefront-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection_and_closes() {
        let config = DbConfig::from_env().expect("DATABASE_URL required");
        let pool = connect(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
        pool.close().await;
        assert!(pool.is_closed());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_honours_pool_size() {
        let config = DbConfig::from_env()
            .expect("DATABASE_URL required")
            .with_max_connections(2);
        let pool = connect(&config).await.expect("pool creation failed");

        assert_eq!(pool.options().get_max_connections(), 2);
        pool.close().await;
    }

    #[tokio::test]
    async fn malformed_url_fails_before_any_query() {
        let config = DbConfig::new("not-a-url");
        assert!(connect(&config).await.is_err());
    }
}
