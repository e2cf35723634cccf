//! Project root and configuration file discovery

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::error::Result;

/// Name of the optional per-project configuration file
pub const CONFIG_FILE_NAME: &str = "manifestgen.toml";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Find the project root starting at `start`
    ///
    /// Walks `start` and its ancestors, returning the first directory that
    /// holds either a `manifestgen.toml` or the given scan root. Falls back
    /// to `start` when no ancestor qualifies.
    #[must_use]
    pub fn find_project_root(start: &Path, scan_root: &str) -> PathBuf {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CONFIG_FILE_NAME).is_file() || current.join(scan_root).is_dir() {
                debug!(root = %current.display(), "discovered project root");
                return current;
            }

            // Move to parent directory
            if !current.pop() {
                break;
            }
        }

        start.to_path_buf()
    }

    /// Canonical form of an explicitly given project root
    ///
    /// Uses `dunce` so Windows paths stay free of `\\?\` prefixes.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist.
    pub fn canonical_root(path: &Path) -> Result<PathBuf> {
        dunce::canonicalize(path)
            .with_context(|| format!("Project root not found: {}", path.display()))
    }

    /// Config file inside `project_root`, if one exists
    #[must_use]
    pub fn config_path(project_root: &Path) -> Option<PathBuf> {
        let candidate = project_root.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }
}
