//! `storefront dump <table>` - print a table as pretty JSON on stdout

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use storefront_db::{CartRepo, PgPool, ProductRepo, ReviewRepo, UserRepo};

#[derive(Parser, Debug)]
pub struct DumpArgs {
    /// Table to print
    #[arg(value_enum)]
    pub table: Table,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Products,
    Users,
    Carts,
    Reviews,
}

pub async fn run_dump(pool: &PgPool, args: DumpArgs) -> Result<()> {
    let rows = fetch(pool, args.table)
        .await
        .with_context(|| format!("Failed to read {:?}", args.table))?;

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

async fn fetch(pool: &PgPool, table: Table) -> Result<Value> {
    let value = match table {
        Table::Products => serde_json::to_value(ProductRepo::new(pool).get_all().await?)?,
        Table::Users => serde_json::to_value(UserRepo::new(pool).get_all().await?)?,
        Table::Carts => serde_json::to_value(CartRepo::new(pool).get_all().await?)?,
        Table::Reviews => serde_json::to_value(ReviewRepo::new(pool).get_all().await?)?,
    };
    Ok(value)
}
