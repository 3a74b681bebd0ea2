//! Schema management: drop and recreate the catalog tables
//!
//! No migration history. Tables are dropped children-first and created
//! parents-first so foreign keys are always satisfiable.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::Result;

/// Tables dropped by [`drop_tables`], children before parents.
///
/// `categories` is no longer created but is still dropped so databases
/// built by older schemas reset cleanly.
pub const DROP_ORDER: [&str; 5] = ["reviews", "carts", "products", "categories", "users"];

/// `(table, DDL)` pairs in creation order.
pub const CREATE_TABLES: [(&str, &str); 4] = [
    (
        "users",
        r#"
        CREATE TABLE users (
            id SERIAL PRIMARY KEY,
            username VARCHAR(255) UNIQUE NOT NULL,
            password VARCHAR(255) NOT NULL,
            birthday DATE NOT NULL,
            cart INTEGER ARRAY,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            admin BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE products (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            category VARCHAR NOT NULL,
            image VARCHAR NOT NULL,
            type VARCHAR(255) NOT NULL,
            price DECIMAL(19,3) NOT NULL CHECK (price >= 0)
        )
        "#,
    ),
    (
        "carts",
        r#"
        CREATE TABLE carts (
            id SERIAL PRIMARY KEY,
            "userId" INTEGER REFERENCES users(id),
            "productIds" INTEGER ARRAY
        )
        "#,
    ),
    (
        "reviews",
        r#"
        CREATE TABLE reviews (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            "productId" INTEGER REFERENCES products(id),
            "userId" INTEGER REFERENCES users(id)
        )
        "#,
    ),
];

/// Drop every catalog table that exists.
pub async fn drop_tables(pool: &PgPool) -> Result<()> {
    info!("Dropping all tables...");

    for table in DROP_ORDER {
        debug!(table, "dropping table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await?;
    }

    info!("Finished dropping tables");
    Ok(())
}

/// Create the catalog tables. Fails if any already exists.
pub async fn create_tables(pool: &PgPool) -> Result<()> {
    info!("Building tables...");

    for (table, ddl) in CREATE_TABLES {
        debug!(table, "creating table");
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("Finished building tables");
    Ok(())
}
