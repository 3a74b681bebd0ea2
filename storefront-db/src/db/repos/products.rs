//! Product repository
//!
//! Handles product CRUD:
//! - create/destroy: single statement with RETURNING
//! - update: typed partial SET clause, every value bound
//! - get_all: one bulk query; get_many resolves ids concurrently

use futures::future::try_join_all;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::error::{DbError, Result};
use crate::models::product::PatchValue;
use crate::models::{NewProduct, Product, ProductPatch};

const RESOURCE: &str = "Product";

const COLUMNS: &str = "id, title, description, category, image, type, price";

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product and return the persisted row.
    ///
    /// NOT NULL and price constraints are enforced by the table; violations
    /// surface as `DbError::Sqlx`.
    pub async fn create(&self, new: &NewProduct) -> Result<Product> {
        let product: Product = sqlx::query_as(&format!(
            r#"
            INSERT INTO products (title, description, category, image, type, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.category)
        .bind(&new.image)
        .bind(&new.kind)
        .bind(new.price)
        .fetch_one(self.pool)
        .await?;

        debug!(id = product.id, title = %product.title, "created product");
        Ok(product)
    }

    /// Get a single product by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Product> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// First product (lowest id) in a category.
    ///
    /// Use [`Self::list_by_category`] for every product in the category.
    pub async fn get_by_category(&self, category: &str) -> Result<Product> {
        sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS}
            FROM products
            WHERE category = $1
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(category)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, format!("category '{category}'")))
    }

    /// All products in a category, ordered by id. Empty when none match.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let products = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM products WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// All products, ordered by id, in a single query.
    pub async fn get_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as(&format!("SELECT {COLUMNS} FROM products ORDER BY id"))
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }

    /// Resolve each id with its own lookup, concurrently.
    ///
    /// Output order matches `ids`, duplicates included. The first missing id
    /// fails the whole call with `NotFound`.
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<Product>> {
        try_join_all(ids.iter().map(|&id| self.get_by_id(id))).await
    }

    /// Every product ordered by category, then id.
    ///
    /// Rows are returned whole; categories are not deduplicated.
    pub async fn get_categories(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY category, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Apply a partial update.
    ///
    /// Returns `Ok(None)` without touching the database when the patch is
    /// empty, otherwise the refreshed row. Unknown id → `NotFound`.
    pub async fn update(&self, id: i32, patch: &ProductPatch) -> Result<Option<Product>> {
        let Some(mut builder) = update_query(id, patch) else {
            return Ok(None);
        };

        debug!(id, columns = ?patch.columns(), "updating product");
        let product: Product = builder
            .build_query_as()
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))?;

        Ok(Some(product))
    }

    /// Delete by id, returning the removed rows (empty if the id was absent).
    pub async fn destroy(&self, id: i32) -> Result<Vec<Product>> {
        let deleted: Vec<Product> = sqlx::query_as(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        debug!(id, deleted = deleted.len(), "destroyed product");
        Ok(deleted)
    }
}

/// Build `UPDATE products SET ... WHERE id = $n RETURNING ...`.
///
/// Only the column names from [`ProductPatch`] are written into the SQL;
/// values and the id are bind parameters. `None` for an empty patch.
fn update_query(id: i32, patch: &ProductPatch) -> Option<QueryBuilder<'static, Postgres>> {
    let assignments = patch.assignments();
    if assignments.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("UPDATE products SET ");
    {
        let mut set = builder.separated(", ");
        for (column, value) in assignments {
            set.push(format!("\"{column}\" = "));
            match value {
                PatchValue::Text(text) => set.push_bind_unseparated(text.to_owned()),
                PatchValue::Decimal(price) => set.push_bind_unseparated(price),
            };
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(format!(" RETURNING {COLUMNS}"));

    Some(builder)
}
