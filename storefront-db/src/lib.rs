//! storefront-db: PostgreSQL persistence for the storefront catalog
//!
//! Products, users, carts and reviews each get a repository that borrows a
//! shared `PgPool` and maps every operation onto one parameterized statement.
//! `seed` resets the schema and loads the sample catalog.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;

pub use config::DbConfig;
pub use db::connect;
pub use db::{CartRepo, ProductRepo, ReviewRepo, UserRepo};
pub use error::{DbError, Result};
pub use seed::SeedReport;
pub use sqlx::PgPool;
