//! Generation orchestration - scan once, render both manifests, write or check

mod diff;
mod writer;

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

pub use diff::unified_diff;
pub use writer::write_atomic;

use crate::config::{Config, ConfigValidator};
use crate::error::{GeneratorError, Result};
use crate::render::{render_automake, render_cmake};
use crate::scanner::{SourceTree, scan_tree};

/// Which manifest a rendering belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// GNU Automake fragment
    Automake,
    /// CMake fragment
    Cmake,
}

impl ManifestKind {
    /// Both kinds, in the order they are generated
    pub const ALL: [Self; 2] = [Self::Automake, Self::Cmake];
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automake => f.write_str("automake"),
            Self::Cmake => f.write_str("cmake"),
        }
    }
}

/// A fully rendered manifest, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifest {
    /// Manifest syntax
    pub kind: ManifestKind,
    /// Destination, relative to the project root
    pub path: PathBuf,
    /// Complete file contents
    pub contents: String,
}

/// What a run does with rendered manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite both output files
    Write,
    /// Compare against the files on disk without writing
    Check,
}

/// Outcome for one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStatus {
    /// File was (re)written; `changed` is false when the content was identical
    Written {
        /// Whether the previous content differed
        changed: bool,
    },
    /// Check mode: file already matches
    UpToDate,
    /// Check mode: file differs or is missing
    Stale {
        /// Unified diff from the current file to the fresh render
        diff: String,
    },
}

/// Per-output entry of a [`Report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReport {
    /// Manifest syntax
    pub kind: ManifestKind,
    /// Destination, relative to the project root
    pub path: PathBuf,
    /// What happened
    pub status: OutputStatus,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Files discovered by the walk (vendor sources excluded)
    pub files_scanned: usize,
    /// One entry per manifest
    pub outputs: Vec<OutputReport>,
}

impl Report {
    /// Outputs found stale in check mode
    #[must_use]
    pub fn stale_paths(&self) -> Vec<PathBuf> {
        self.outputs
            .iter()
            .filter(|o| matches!(o.status, OutputStatus::Stale { .. }))
            .map(|o| o.path.clone())
            .collect()
    }

    /// Fail if any output was found stale
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::StaleOutputs`] listing the stale files.
    pub fn ensure_up_to_date(&self) -> Result<()> {
        let stale = self.stale_paths();
        if stale.is_empty() {
            Ok(())
        } else {
            Err(GeneratorError::StaleOutputs(stale).into())
        }
    }
}

/// Main generation engine
#[derive(Debug, Clone)]
pub struct Generator {
    project_root: PathBuf,
    config: Config,
}

impl Generator {
    /// Create a generator rooted at `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(project_root: impl Into<PathBuf>, config: Config) -> Result<Self> {
        ConfigValidator::validate(&config)?;
        Ok(Self {
            project_root: project_root.into(),
            config,
        })
    }

    /// Project root all configured paths are relative to
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Walk the scan root
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingScanRoot`] when the scan root does
    /// not exist, instead of producing near-empty manifests, and propagates
    /// traversal errors.
    pub fn scan(&self) -> Result<SourceTree> {
        let root = self.project_root.join(&self.config.layout.scan_root);
        if !root.is_dir() {
            return Err(GeneratorError::MissingScanRoot(root).into());
        }
        scan_tree(&self.project_root, &self.config.layout)
    }

    /// Render one manifest from a scanned tree
    #[must_use]
    pub fn render_one(&self, tree: &SourceTree, kind: ManifestKind) -> RenderedManifest {
        let outputs = &self.config.outputs;
        let (path, contents) = match kind {
            ManifestKind::Automake => (&outputs.automake, render_automake(tree, outputs)),
            ManifestKind::Cmake => (&outputs.cmake, render_cmake(tree, outputs)),
        };
        RenderedManifest {
            kind,
            path: PathBuf::from(path),
            contents,
        }
    }

    /// Render both manifests from a scanned tree, Automake first
    #[must_use]
    pub fn render(&self, tree: &SourceTree) -> Vec<RenderedManifest> {
        ManifestKind::ALL
            .into_iter()
            .map(|kind| self.render_one(tree, kind))
            .collect()
    }

    /// Scan, render and then write or check every manifest
    ///
    /// Both manifests are rendered before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails, an existing manifest cannot be
    /// read, or a write fails. Stale outputs in check mode are reported,
    /// not raised; see [`Report::ensure_up_to_date`].
    pub fn run(&self, mode: Mode) -> Result<Report> {
        let tree = self.scan()?;
        let mut report = Report {
            files_scanned: tree.file_count(),
            outputs: Vec::new(),
        };

        let manifests = self.render(&tree);

        if mode == Mode::Write {
            for manifest in &manifests {
                let target = self.project_root.join(&manifest.path);
                if let Some(parent) = target.parent()
                    && !parent.is_dir()
                {
                    anyhow::bail!(
                        "Output directory for {} manifest does not exist: {}",
                        manifest.kind,
                        parent.display()
                    );
                }
            }
        }

        for manifest in manifests {
            let target = self.project_root.join(&manifest.path);
            let current = read_existing(&target)?;

            let status = match mode {
                Mode::Write => {
                    write_atomic(&target, &manifest.contents)
                        .with_context(|| format!("Failed to write {} manifest", manifest.kind))?;
                    info!(path = %manifest.path.display(), "wrote {} manifest", manifest.kind);
                    OutputStatus::Written {
                        changed: current.as_deref() != Some(manifest.contents.as_str()),
                    }
                }
                Mode::Check => {
                    let current = current.unwrap_or_default();
                    if current == manifest.contents {
                        OutputStatus::UpToDate
                    } else {
                        let label = manifest.path.display().to_string();
                        OutputStatus::Stale {
                            diff: unified_diff(&current, &manifest.contents, &label),
                        }
                    }
                }
            };

            debug!(path = %manifest.path.display(), ?status, "processed manifest");
            report.outputs.push(OutputReport {
                kind: manifest.kind,
                path: manifest.path,
                status,
            });
        }

        Ok(report)
    }
}

/// Current content of `path`, or `None` if it does not exist yet
fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
