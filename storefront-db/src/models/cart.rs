//! Cart rows
//!
//! A cart is a user plus an ordered array of product ids. No quantities,
//! no price snapshot: a product appearing twice is two line items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cart record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Cart {
    pub id: i32,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
    #[sqlx(rename = "productIds")]
    #[serde(rename = "productIds")]
    pub product_ids: Option<Vec<i32>>,
}

impl Cart {
    /// Line items, treating a NULL array as an empty cart.
    pub fn items(&self) -> &[i32] {
        self.product_ids.as_deref().unwrap_or_default()
    }
}

/// Insert payload for `carts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCart {
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "productIds", default)]
    pub product_ids: Vec<i32>,
}
