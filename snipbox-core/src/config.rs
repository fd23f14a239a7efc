//! Configuration loading
//!
//! Precedence, lowest first: built-in defaults, TOML file, environment.
//! The CLI applies its own flags on top of whatever this returns.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level snipbox configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnipboxConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub addr: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/snipbox".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("./ui/html"),
            static_dir: PathBuf::from("./ui/static"),
        }
    }
}

impl SnipboxConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `~/.snipbox/config.toml`
    /// is used when present and defaults otherwise. Environment overrides
    /// are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(path = ?default_path, "no config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file path: ~/.snipbox/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".snipbox/config.toml")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `DATABASE_URL` and `SNIPBOX_ADDR`.
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(addr) = env::var("SNIPBOX_ADDR") {
            self.server.addr = addr
                .parse()
                .map_err(|_| CoreError::config(format!("SNIPBOX_ADDR '{}' is not a socket address", addr)))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(CoreError::config("database.max_connections must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = SnipboxConfig::default();
        assert_eq!(config.server.addr.port(), 4000);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.ui.templates_dir, PathBuf::from("./ui/html"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SnipboxConfig::from_toml(
            r#"
            [database]
            url = "postgres://db/snippets"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.url, "postgres://db/snippets");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn full_toml() {
        let config = SnipboxConfig::from_toml(
            r#"
            [server]
            addr = "0.0.0.0:8080"

            [database]
            url = "postgres://db/snippets"
            max_connections = 20

            [ui]
            templates_dir = "/srv/ui/html"
            static_dir = "/srv/ui/static"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.addr.port(), 8080);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.ui.static_dir, PathBuf::from("/srv/ui/static"));
    }

    #[test]
    fn bad_addr_is_rejected() {
        let err = SnipboxConfig::from_toml("[server]\naddr = \"not-an-addr\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SnipboxConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
    }

    #[test]
    fn invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server").unwrap();

        let err = SnipboxConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
    }

    #[test]
    fn zero_connections_rejected() {
        let mut config = SnipboxConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }
}
