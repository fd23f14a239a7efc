//! Template maintenance commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use snipbox_server::{TemplateCache, REQUIRED_PAGES};

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesCommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    /// Compose every page and fail on missing or unparsable templates
    Check {
        /// Directory holding base.html, partials/ and pages/ (default: from config)
        #[arg(long)]
        templates_dir: Option<PathBuf>,

        /// Config file (default: ~/.snipbox/config.toml if it exists)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

pub fn run_templates(args: TemplatesArgs) -> Result<()> {
    match args.command {
        TemplatesCommand::Check {
            templates_dir,
            config,
        } => check(templates_dir, config),
    }
}

fn check(templates_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let dir = match templates_dir {
        Some(dir) => dir,
        None => super::load_config(config.as_deref())?.ui.templates_dir,
    };

    TemplateCache::compose(&dir, &REQUIRED_PAGES)
        .with_context(|| format!("Required pages failed to compose in {}", dir.display()))?;

    // Also catch broken pages nothing renders yet
    let all = TemplateCache::discover(&dir)
        .with_context(|| format!("Templates failed to compose in {}", dir.display()))?;

    for page in all.page_names() {
        println!("ok  {}", page);
    }
    Ok(())
}
