//! Core error types for the manifestgen library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Failures callers need to tell apart from plain I/O errors.
///
/// These travel inside `anyhow::Error`; use `downcast_ref` to inspect them.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The configured scan root is absent under the project root
    #[error("scan root does not exist: {}", .0.display())]
    MissingScanRoot(PathBuf),

    /// The configuration is internally inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scanned path cannot be represented in a text manifest
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// A walked path could not be expressed relative to the project root
    #[error("{path} is not inside project root {base}")]
    OutsideProjectRoot {
        /// Offending path
        path: String,
        /// Project root it was expected under
        base: String,
    },

    /// `--check` found manifests that differ from what would be generated
    #[error("{} manifest(s) out of date: {}", .0.len(), display_paths(.0))]
    StaleOutputs(Vec<PathBuf>),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_outputs_message_lists_paths() {
        let err = GeneratorError::StaleOutputs(vec![
            PathBuf::from("a/sources.am"),
            PathBuf::from("src/sources.cmake"),
        ]);
        assert_eq!(
            err.to_string(),
            "2 manifest(s) out of date: a/sources.am, src/sources.cmake"
        );
    }

    #[test]
    fn test_outside_project_root_message() {
        let err = GeneratorError::OutsideProjectRoot {
            path: "/elsewhere/x.c".to_string(),
            base: "/project".to_string(),
        };
        assert_eq!(err.to_string(), "/elsewhere/x.c is not inside project root /project");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = GeneratorError::MissingScanRoot(PathBuf::from("src/lib")).into();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::MissingScanRoot(_))
        ));
    }
}
