//! Connection settings read from the environment

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;
use crate::error::{DbError, Result};

/// Environment variable holding the PostgreSQL connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding the pool size
pub const MAX_CONNECTIONS_VAR: &str = "STOREFRONT_MAX_CONNECTIONS";

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Pool size, clamped to at least one connection.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    /// Read `DATABASE_URL` and `STOREFRONT_MAX_CONNECTIONS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| DbError::config(format!("{DATABASE_URL_VAR} not set")))?;

        let config = Self::new(database_url);
        match lookup(MAX_CONNECTIONS_VAR) {
            Some(raw) => {
                let max = raw.trim().parse::<u32>().map_err(|e| {
                    DbError::config(format!("{MAX_CONNECTIONS_VAR}='{raw}': {e}"))
                })?;
                Ok(config.with_max_connections(max))
            }
            None => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn requires_database_url() {
        let err = DbConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, DbError::Config { .. }));
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn blank_url_is_missing() {
        let err = DbConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert!(matches!(err, DbError::Config { .. }));
    }

    #[test]
    fn default_pool_size() {
        let config = DbConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/shop")]))
            .unwrap();
        assert_eq!(config.database_url, "postgres://localhost/shop");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn pool_size_override() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("STOREFRONT_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 12);

        let zero = DbConfig::new("postgres://x").with_max_connections(0);
        assert_eq!(zero.max_connections, 1);
    }

    #[test]
    fn rejects_garbage_pool_size() {
        let err = DbConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("STOREFRONT_MAX_CONNECTIONS", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("STOREFRONT_MAX_CONNECTIONS"));
    }
}
