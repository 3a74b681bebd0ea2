//! Review repository
//!
//! The 1..=5 rating bound and both foreign keys are checked by the table,
//! not here. Out-of-range ratings fail with a CHECK violation.

use sqlx::PgPool;
use tracing::debug;

use crate::error::{DbError, Result};
use crate::models::{NewReview, Review};

const RESOURCE: &str = "Review";

const COLUMNS: &str = r#"id, name, description, rating, "productId", "userId""#;

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewReview) -> Result<Review> {
        let review: Review = sqlx::query_as(&format!(
            r#"
            INSERT INTO reviews (name, description, rating, "productId", "userId")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.rating)
        .bind(new.product_id)
        .bind(new.user_id)
        .fetch_one(self.pool)
        .await?;

        debug!(id = review.id, rating = review.rating, "created review");
        Ok(review)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Review> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM reviews WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// All reviews ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as(&format!("SELECT {COLUMNS} FROM reviews ORDER BY id"))
            .fetch_all(self.pool)
            .await?;

        Ok(reviews)
    }

    /// Reviews for one product, ordered by id.
    pub async fn list_for_product(&self, product_id: i32) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as(&format!(
            r#"SELECT {COLUMNS} FROM reviews WHERE "productId" = $1 ORDER BY id"#
        ))
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Delete by id, returning the removed rows (empty if the id was absent).
    pub async fn destroy(&self, id: i32) -> Result<Vec<Review>> {
        let deleted: Vec<Review> = sqlx::query_as(&format!(
            "DELETE FROM reviews WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        debug!(id, deleted = deleted.len(), "destroyed review");
        Ok(deleted)
    }
}
