//! Forward-slash path helpers
//!
//! Manifests always use `/` separators, whatever platform produced them,
//! so scanned paths are carried as normalized strings rather than `PathBuf`.

use std::path::{Component, Path};

use crate::error::{GeneratorError, Result};

/// Lexically normalized components of a forward-slash path
fn normalize(path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }
    parts
}

/// Express `path` relative to `base`, both relative to the same directory
///
/// Purely lexical: climbs out of `base` with `..` where the paths diverge
/// and returns `.` when they are the same.
#[must_use]
pub fn relative_path(path: &str, base: &str) -> String {
    let path = normalize(path);
    let base = normalize(base);

    let common = path
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<&str> = std::iter::repeat_n("..", base.len() - common)
        .chain(path[common..].iter().copied())
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Whether `path` is `base` or lies beneath it
#[must_use]
pub fn is_within(path: &str, base: &str) -> bool {
    let path = normalize(path);
    let base = normalize(base);
    path.starts_with(&base) && !path.contains(&"..")
}

/// Render a filesystem path with `/` separators
///
/// # Errors
///
/// Returns [`GeneratorError::NonUtf8Path`] if any component is not UTF-8.
pub fn to_slash(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| GeneratorError::NonUtf8Path(path.to_path_buf()))?;
                parts.push(part);
            }
            Component::ParentDir => parts.push(".."),
            Component::RootDir => absolute = true,
            Component::CurDir | Component::Prefix(_) => {}
        }
    }

    let joined = parts.join("/");
    Ok(if absolute { format!("/{joined}") } else { joined })
}
