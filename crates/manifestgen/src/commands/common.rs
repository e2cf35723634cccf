//! Project root and configuration resolution shared by every command

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use manifestgen_core::{Config, ConfigDiscovery, Generator, Layout};
use tracing::debug;

/// Options that decide where the generator runs and with which config
pub struct GenerateOptions<'a> {
    /// Explicit project root
    pub project_root: Option<&'a Path>,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
}

impl<'a> GenerateOptions<'a> {
    /// Create new generate options
    #[must_use]
    pub const fn new(
        project_root: Option<&'a Path>,
        config_path: Option<&'a Path>,
        no_config: bool,
    ) -> Self {
        Self {
            project_root,
            config_path,
            no_config,
        }
    }

    /// Resolve the project root and configuration, then build a generator
    ///
    /// An explicit `--config` is loaded first so its scan root drives
    /// discovery; otherwise discovery uses the default layout and the
    /// project's `manifestgen.toml` is loaded afterwards.
    pub fn generator(&self) -> anyhow::Result<Generator> {
        let explicit = match self.config_path {
            Some(path) => Some(Config::load(Some(path))?),
            None => None,
        };

        let scan_root = explicit
            .as_ref()
            .map_or_else(|| Layout::default().scan_root, |c| c.layout.scan_root.clone());
        let project_root = self.resolve_root(&scan_root)?;

        let config = match explicit {
            Some(config) => config,
            None if self.no_config => Config::default(),
            None => {
                let found = ConfigDiscovery::config_path(&project_root);
                if let Some(path) = &found {
                    debug!(config = %path.display(), "using project config");
                }
                Config::load(found.as_deref())?
            }
        };

        Generator::new(project_root, config)
    }

    fn resolve_root(&self, scan_root: &str) -> anyhow::Result<PathBuf> {
        let start = match self.project_root {
            Some(root) => return ConfigDiscovery::canonical_root(root),
            None => env::current_dir().context("Failed to determine current directory")?,
        };
        let discovered = ConfigDiscovery::find_project_root(&start, scan_root);
        ConfigDiscovery::canonical_root(&discovered)
    }
}
