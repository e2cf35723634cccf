//! Recursive directory walk with hidden-directory pruning
//!
//! Directories are yielded pre-order. Hidden directories are removed
//! through `filter_entry`, so walkdir never opens them or anything below.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::filters::ExtensionClassifier;
use super::paths::to_slash;
use super::{ClassifiedFile, ScannedDirectory};
use crate::error::{GeneratorError, Result};

/// Check if an entry is a directory whose name starts with `.`
///
/// The walk root itself is never considered hidden.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Walk `root` and return one listing per visited directory
///
/// `project_root` is stripped from every reported path so listings hold
/// project-relative, forward-slash paths. A missing `root` yields no
/// listings.
///
/// # Errors
///
/// Returns an error if directory traversal fails due to permission issues
/// or I/O errors, or if a matching file name is not UTF-8.
pub fn walk(
    project_root: &Path,
    root: &Path,
    classifier: &ExtensionClassifier,
    sorted: bool,
) -> Result<Vec<ScannedDirectory>> {
    if !root.is_dir() {
        debug!(root = %root.display(), "scan root missing, nothing to walk");
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(root).follow_links(false);
    if sorted {
        walker = walker.sort_by_file_name();
    }

    let mut directories: Vec<ScannedDirectory> = Vec::new();
    let mut slots: HashMap<PathBuf, usize> = HashMap::new();

    let entries = walker.into_iter().filter_entry(|entry| {
        let hidden = is_hidden_dir(entry);
        if hidden {
            debug!(dir = %entry.path().display(), "skipping hidden directory");
        }
        !hidden
    });

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            let relative = project_relative(project_root, path)?;
            debug!(dir = %relative, "visiting directory");
            slots.insert(path.to_path_buf(), directories.len());
            directories.push(ScannedDirectory {
                path: relative,
                files: Vec::new(),
            });
            continue;
        }

        // Symlinked directories are listed but never descended into
        if entry.file_type().is_symlink() && path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let Some(class) = classifier.classify(&name) else {
            continue;
        };

        let slot = path
            .parent()
            .and_then(|parent| slots.get(parent))
            .copied()
            .with_context(|| format!("File visited before its directory: {}", path.display()))?;

        let file = project_relative(project_root, path)?;
        directories[slot].files.push(ClassifiedFile { path: file, class });
    }

    Ok(directories)
}

fn project_relative(project_root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(project_root)
        .map_err(|_| GeneratorError::OutsideProjectRoot {
            path: path.display().to_string(),
            base: project_root.display().to_string(),
        })?;
    to_slash(relative)
}
