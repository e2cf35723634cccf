//! Configuration loading, discovery and validation
//!
//! Every value the generator used to hard-code (roots, extensions, vendor
//! list, banner, output paths) lives here so callers and tests can swap
//! them without touching the filesystem layout.

mod discovery;
mod types;
mod validation;

use std::fs;
use std::path::Path;

use anyhow::Context;

pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery};
pub use types::{Config, DEFAULT_BANNER, DEFAULT_VENDOR_SOURCES, Layout, Outputs};
pub use validation::ConfigValidator;

use crate::error::Result;

impl Config {
    /// Load configuration from `path`, or the defaults when `path` is `None`
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            None => Self::default(),
        };

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Serialize to TOML, in the same shape `load` accepts
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
