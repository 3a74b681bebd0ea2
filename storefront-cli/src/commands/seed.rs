//! `storefront seed` - reset the database and load the sample catalog

use anyhow::{Context, Result};
use storefront_db::seed;
use storefront_db::PgPool;
use tracing::info;

pub async fn run_seed(pool: &PgPool) -> Result<()> {
    let report = seed::run(pool)
        .await
        .context("Error building the database")?;

    info!(
        products = report.products,
        users = report.users,
        reviews = report.reviews,
        "Seed complete"
    );
    Ok(())
}
