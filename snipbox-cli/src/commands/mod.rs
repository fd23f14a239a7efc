//! Command implementations for the snipbox CLI

pub mod migrate;
pub mod serve;
pub mod templates;

use std::path::Path;

use anyhow::{Context, Result};
use snipbox_core::SnipboxConfig;

pub use migrate::run_migrate;
pub use serve::run_serve;
pub use templates::run_templates;

/// Load config from `path` (or the default location) with env overrides.
fn load_config(path: Option<&Path>) -> Result<SnipboxConfig> {
    SnipboxConfig::load(path).context("Failed to load configuration")
}
