//! Error types for storefront-db
//!
//! Callers see two kinds of failure: a lookup that matched no row, and
//! anything the database rejected. The second carries the original
//! `sqlx::Error` untouched so constraint violations stay inspectable.

use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::models::ValidationError;

/// Main error type for repository and seed operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Statement failed in the driver or the database
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Lookup returned no row.
    ///
    /// Renders as `"<Resource> Not Found: <key>"`, e.g. `"Product Not Found: 42"`.
    /// The `"<Resource> Not Found"` prefix is stable; the key suffix is for
    /// humans and may change.
    #[error("{resource} Not Found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// Input rejected before it reached the database
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Missing or malformed connection settings
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for storefront-db operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a not-found error for `resource` looked up by `key`
    pub fn not_found(resource: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Duplicate value in a UNIQUE column (e.g. `users.username`)
    pub fn is_unique_violation(&self) -> bool {
        matches!(self.database_kind(), Some(ErrorKind::UniqueViolation))
    }

    /// CHECK constraint rejected the row (e.g. review rating outside 1..=5)
    pub fn is_check_violation(&self) -> bool {
        matches!(self.database_kind(), Some(ErrorKind::CheckViolation))
    }

    /// Referenced row does not exist
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.database_kind(), Some(ErrorKind::ForeignKeyViolation))
    }

    fn database_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Sqlx(sqlx::Error::Database(err)) => Some(err.kind()),
            _ => None,
        }
    }
}
