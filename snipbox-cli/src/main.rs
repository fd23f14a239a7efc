//! snipbox CLI - serve and maintain the snippet web application
//!
//! - `serve`: run the HTTP server (Postgres or in-memory storage)
//! - `migrate`: create the snippets schema
//! - `templates check`: compose the page templates and report problems

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "snipbox",
    author,
    version,
    about = "Create, store and share short text snippets that expire"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the snippets table and index
    Migrate(commands::migrate::MigrateArgs),
    /// Template maintenance
    Templates(commands::templates::TemplatesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Templates(args) => commands::run_templates(args)?,
    }
    Ok(())
}
