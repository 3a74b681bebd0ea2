//! Review rows
//!
//! Ratings are plain integers here; the 1..=5 bound lives in the table's
//! CHECK constraint.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub rating: i32,
    #[sqlx(rename = "productId")]
    #[serde(rename = "productId")]
    pub product_id: Option<i32>,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

/// Insert payload for `reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub description: String,
    pub rating: i32,
    #[serde(rename = "productId")]
    pub product_id: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
}
