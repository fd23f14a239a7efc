/// Structured error types for snipbox-core.
///
/// The binary wraps these in `anyhow` with context; library callers get
/// enums they can match on.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading a config file failed
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML or has the wrong shape
    #[error("invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value failed validation
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::config("server.addr is not a socket address");
        assert_eq!(
            err.to_string(),
            "configuration error: server.addr is not a socket address"
        );

        let err = CoreError::ConfigRead {
            path: "/tmp/snipbox.toml".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/snipbox.toml"));
    }
}
