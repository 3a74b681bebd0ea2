//! storefront CLI - database bootstrap for the storefront catalog
//!
//! - `seed`: drop and rebuild every table, then load the sample catalog
//! - `dump`: print a table as JSON
//!
//! The pool is opened once, handed to the command, and closed whether the
//! command succeeded or not.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront_db::db::pool::DEFAULT_MAX_CONNECTIONS;
use storefront_db::config::{DATABASE_URL_VAR, MAX_CONNECTIONS_VAR};
use storefront_db::DbConfig;
use tracing::{debug, info};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    author,
    version,
    about = "Seed and inspect the storefront catalog database"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Maximum connections in the pool
    #[arg(long, global = true, env = "STOREFRONT_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drop all tables, recreate the schema and insert sample data
    Seed,
    /// Print every row of a table as JSON
    Dump(commands::dump::DumpArgs),
}

impl Cli {
    /// Resolve settings through the library loader; clap has already applied
    /// the env and `.env` fallbacks to these fields.
    fn db_config(&self) -> Result<DbConfig> {
        DbConfig::from_lookup(|key| match key {
            DATABASE_URL_VAR => self.database_url.clone(),
            MAX_CONNECTIONS_VAR => Some(self.max_connections.to_string()),
            _ => None,
        })
        .context("Set the database via --database-url, DATABASE_URL env, or ~/.storefront/.env")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so .env values feed clap's env fallbacks
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    for path in &env_files {
        debug!("Loaded .env from {}", path.display());
    }

    let db_config = cli.db_config()?;
    let pool = storefront_db::connect(&db_config)
        .await
        .context("Failed to create database pool")?;

    let result = match cli.command {
        Commands::Seed => commands::seed::run_seed(&pool).await,
        Commands::Dump(args) => commands::dump::run_dump(&pool, args).await,
    };

    pool.close().await;
    info!("Connection closed");

    result
}
