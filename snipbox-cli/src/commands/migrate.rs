//! Schema migration command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use snipbox_server::db::{create_pool, migrations};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Config file (default: ~/.snipbox/config.toml if it exists)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// PostgreSQL URL (overrides config and DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => super::load_config(args.config.as_deref())?.database.url,
    };

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Schema is up to date");
    Ok(())
}
