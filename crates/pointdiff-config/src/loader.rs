//! Configuration loading from TOML files.

use crate::schema::Config;
use pointdiff_common::{PointDiffError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pointdiff.toml";

/// Configuration loader for the application.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads and validates the configuration file.
    pub fn load(&self) -> Result<Config> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| PointDiffError::file(&self.path, e))?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `pointdiff.toml` from the working directory, or the defaults
    /// when the file does not exist.
    pub fn discover() -> Result<Config> {
        Self::discover_in(".")
    }

    /// Loads `pointdiff.toml` from `dir`, or the defaults when absent.
    pub fn discover_in(dir: impl AsRef<Path>) -> Result<Config> {
        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::new(candidate).load()
        } else {
            debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}
