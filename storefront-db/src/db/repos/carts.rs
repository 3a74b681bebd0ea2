//! Cart repository
//!
//! Line items are an INTEGER[] of product ids mutated in place with
//! `array_append` / `array_remove`.

use sqlx::PgPool;
use tracing::debug;

use super::ProductRepo;
use crate::error::{DbError, Result};
use crate::models::{Cart, NewCart, Product};

const RESOURCE: &str = "Cart";

const COLUMNS: &str = r#"id, "userId", "productIds""#;

/// Cart repository
pub struct CartRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a cart for a user. Unknown user → foreign-key violation.
    pub async fn create(&self, new: &NewCart) -> Result<Cart> {
        let cart: Cart = sqlx::query_as(&format!(
            r#"
            INSERT INTO carts ("userId", "productIds")
            VALUES ($1, $2)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new.user_id)
        .bind(&new.product_ids)
        .fetch_one(self.pool)
        .await?;

        debug!(id = cart.id, user_id = new.user_id, "created cart");
        Ok(cart)
    }

    /// Append a product id to the cart's line items.
    pub async fn add_to_cart(&self, cart_id: i32, product_id: i32) -> Result<Cart> {
        sqlx::query_as(&format!(
            r#"
            UPDATE carts
            SET "productIds" = array_append(COALESCE("productIds", '{{}}'::INTEGER[]), $2)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(cart_id)
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, cart_id))
    }

    /// Remove every occurrence of a product id from the cart.
    pub async fn remove_from_cart(&self, cart_id: i32, product_id: i32) -> Result<Cart> {
        sqlx::query_as(&format!(
            r#"
            UPDATE carts
            SET "productIds" = array_remove("productIds", $2)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(cart_id)
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, cart_id))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Cart> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM carts WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// Carts owned by a user, ordered by id.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Cart>> {
        let carts = sqlx::query_as(&format!(
            r#"SELECT {COLUMNS} FROM carts WHERE "userId" = $1 ORDER BY id"#
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(carts)
    }

    /// All carts ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Cart>> {
        let carts = sqlx::query_as(&format!("SELECT {COLUMNS} FROM carts ORDER BY id"))
            .fetch_all(self.pool)
            .await?;

        Ok(carts)
    }

    /// Delete by id, returning the removed rows (empty if the id was absent).
    pub async fn destroy(&self, id: i32) -> Result<Vec<Cart>> {
        let deleted: Vec<Cart> = sqlx::query_as(&format!(
            "DELETE FROM carts WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        debug!(id, deleted = deleted.len(), "destroyed cart");
        Ok(deleted)
    }

    /// Resolve the cart's line items to products, in line order.
    pub async fn products(&self, cart_id: i32) -> Result<Vec<Product>> {
        let cart = self.get_by_id(cart_id).await?;
        ProductRepo::new(self.pool).get_many(cart.items()).await
    }
}
