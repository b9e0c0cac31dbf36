//! Configuration for the sqlog CLI
//!
//! Handles loading `sqlog.toml`:
//!
//! ```toml
//! [log]
//! enabled = true
//! color = "auto"
//!
//! [log.sink]
//! kind = "file"
//! path = "./queries.log"
//! ```

use serde::Deserialize;
use sqlog_core::LogSettings;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sqlog.toml";

/// Contents of `sqlog.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logger settings
    pub log: LogSettings,
}

impl Config {
    /// Load `sqlog.toml` from the working directory, falling back to
    /// defaults when it does not exist.
    pub fn load() -> Result<Self, Error> {
        match Self::load_from(Path::new(CONFIG_FILE)) {
            Err(Error::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
