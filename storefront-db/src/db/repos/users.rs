//! User repository
//!
//! Username uniqueness is enforced by the table's UNIQUE constraint; a
//! duplicate insert fails with `DbError::Sqlx` (see `is_unique_violation`).

use sqlx::PgPool;
use tracing::debug;

use crate::error::{DbError, Result};
use crate::models::{NewUser, User};

const RESOURCE: &str = "User";

const COLUMNS: &str = "id, username, password, birthday, cart, active, admin";

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user, applying the active/admin column defaults when unset.
    pub async fn create(&self, new: &NewUser) -> Result<User> {
        let user: User = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (username, password, birthday, cart, active, admin)
            VALUES ($1, $2, $3, $4, COALESCE($5, TRUE), COALESCE($6, FALSE))
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.username)
        .bind(&new.password)
        .bind(new.birthday)
        .bind(new.cart.as_deref())
        .bind(new.active)
        .bind(new.admin)
        .fetch_one(self.pool)
        .await?;

        debug!(id = user.id, username = %user.username, "created user");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM users WHERE username = $1"))
            .bind(username)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, format!("username '{username}'")))
    }

    /// All users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as(&format!("SELECT {COLUMNS} FROM users ORDER BY id"))
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }
}
