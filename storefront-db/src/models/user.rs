//! User rows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Birthday formats accepted by [`parse_birthday`], tried in order.
const BIRTHDAY_FORMATS: [&str; 2] = ["%m-%d-%Y", "%Y-%m-%d"];

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub birthday: NaiveDate,
    pub cart: Option<Vec<i32>>,
    pub active: bool,
    pub admin: bool,
}

/// Insert payload for `users`.
///
/// `active` and `admin` fall back to the column defaults (true / false)
/// when left as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub birthday: NaiveDate,
    #[serde(default)]
    pub cart: Option<Vec<i32>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub admin: Option<bool>,
}

/// Parse a birthday written as `MM-DD-YYYY` (the seed format) or ISO `YYYY-MM-DD`.
pub fn parse_birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "birthday" });
    }

    BIRTHDAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "birthday",
            value: raw.to_owned(),
            expected: "MM-DD-YYYY or YYYY-MM-DD",
        })
}
