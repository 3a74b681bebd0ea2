//! Product rows and the typed partial update

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Decimal,
}

/// Insert payload for `products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Decimal,
}

/// Partial update for a product.
///
/// `None` leaves the column unchanged. Column names are fixed by this type,
/// so the generated SET clause never contains caller-supplied identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<Decimal>,
}

/// A single SET assignment value
#[derive(Debug, Clone, PartialEq)]
pub enum PatchValue<'a> {
    Text(&'a str),
    Decimal(Decimal),
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// Column/value pairs for every present field, in column order.
    pub fn assignments(&self) -> Vec<(&'static str, PatchValue<'_>)> {
        let text = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("image", &self.image),
            ("type", &self.kind),
        ];

        let mut out: Vec<(&'static str, PatchValue<'_>)> = text
            .into_iter()
            .filter_map(|(column, value)| {
                value.as_deref().map(|v| (column, PatchValue::Text(v)))
            })
            .collect();

        if let Some(price) = self.price {
            out.push(("price", PatchValue::Decimal(price)));
        }
        out
    }

    /// Names of the columns this patch touches.
    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments().into_iter().map(|(c, _)| c).collect()
    }
}
