//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use snipbox_server::db::{create_pool_with_options, migrations};
use snipbox_server::{
    run_server, AppState, MemorySnippetStore, ServerConfig, SnippetRepo, TemplateCache,
    REQUIRED_PAGES,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Config file (default: ~/.snipbox/config.toml if it exists)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Address to bind to (default: 127.0.0.1:4000)
    #[arg(long, short = 'a')]
    pub addr: Option<SocketAddr>,

    /// PostgreSQL URL (overrides config and DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Directory holding base.html, partials/ and pages/
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Keep snippets in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Do not create the schema on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    if let Some(dir) = args.templates_dir {
        config.ui.templates_dir = dir;
    }
    if let Some(dir) = args.static_dir {
        config.ui.static_dir = dir;
    }

    // Template problems stop startup before anything is served.
    let templates = TemplateCache::compose(&config.ui.templates_dir, &REQUIRED_PAGES)
        .with_context(|| {
            format!(
                "Failed to load templates from {}",
                config.ui.templates_dir.display()
            )
        })?;
    tracing::info!(pages = ?templates.page_names(), "templates loaded");

    let state = if args.in_memory {
        tracing::warn!("Using in-memory storage - snippets are lost on exit");
        AppState::new(MemorySnippetStore::new(), templates)
    } else {
        let pool = create_pool_with_options(&config.database.url, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        AppState::new(SnippetRepo::new(pool), templates)
    };

    let server_config = ServerConfig {
        bind_addr: config.server.addr,
        static_dir: config.ui.static_dir,
    };

    // Blocks until shutdown
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
