//! Shared helpers for database-backed tests
//!
//! Each test runs in its own PostgreSQL schema (set as the connection's
//! `search_path`) so tests can run in parallel against one database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p storefront-db -- --ignored

#![allow(dead_code)]

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use uuid::Uuid;

use storefront_db::models::{NewProduct, NewUser};
use storefront_db::schema;
use storefront_db::DbConfig;

/// An isolated schema plus a pool pinned to it
pub struct TestDb {
    pub pool: PgPool,
    schema: String,
    url: String,
}

impl TestDb {
    /// Fresh, empty schema (no tables).
    pub async fn empty() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("storefront_db=debug")
            .with_test_writer()
            .try_init();

        let url = DbConfig::from_env()
            .expect("DATABASE_URL required")
            .database_url;
        let schema = format!("storefront_test_{}", Uuid::new_v4().simple());

        let admin = PgPool::connect(&url).await.expect("connect failed");
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create schema failed");
        admin.close().await;

        let options = PgConnectOptions::from_str(&url)
            .expect("invalid DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("pool creation failed");

        Self { pool, schema, url }
    }

    /// Fresh schema with every catalog table created.
    pub async fn with_tables() -> Self {
        let db = Self::empty().await;
        schema::create_tables(&db.pool)
            .await
            .expect("create tables failed");
        db
    }

    /// Close the pool and drop the schema.
    pub async fn teardown(self) {
        self.pool.close().await;

        let admin = PgPool::connect(&self.url).await.expect("connect failed");
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&admin)
            .await
            .expect("drop schema failed");
        admin.close().await;
    }
}

pub fn product(title: &str, category: &str, price: i64) -> NewProduct {
    NewProduct {
        title: title.to_owned(),
        description: format!("Description for {title}"),
        category: category.to_owned(),
        image: "https://example.com/product.jpg".to_owned(),
        kind: "Product Type 1".to_owned(),
        price: Decimal::from(price),
    }
}

pub fn user(username: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        password: format!("{username}password"),
        birthday: NaiveDate::from_ymd_opt(1993, 9, 21).unwrap(),
        cart: None,
        active: None,
        admin: None,
    }
}
