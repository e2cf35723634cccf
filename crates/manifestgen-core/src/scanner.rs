//! Source tree scanning
//!
//! The tree is walked once per run. Each visited directory keeps its
//! classified files, and the per-manifest views (headers only, sources
//! only, both) are derived from that single [`SourceTree`].

mod filters;
pub mod paths;
mod walk;


use std::path::Path;

use tracing::debug;

pub use filters::{ClassSet, ExtensionClassifier, FileClass};

use crate::config::Layout;
use crate::error::Result;

/// Name of the synthetic group holding the vendor sources
pub const VENDOR_GROUP: &str = "vendor";

/// A named bucket of file paths, one per scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Directory path relative to the source root, or `vendor`
    pub name: String,
    /// Project-relative file paths in scan order
    pub files: Vec<String>,
}

/// A file found by the walk together with its class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    /// Project-relative, forward-slash path
    pub path: String,
    /// Source or header
    pub class: FileClass,
}

/// A visited directory and the classified files directly inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDirectory {
    /// Project-relative, forward-slash directory path
    pub path: String,
    /// Files in filesystem enumeration order
    pub files: Vec<ClassifiedFile>,
}

/// Result of walking the scan root once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    source_root: String,
    directories: Vec<ScannedDirectory>,
    vendor_sources: Vec<String>,
}

impl SourceTree {
    /// Build a tree from already scanned directories
    ///
    /// Renderer tests use this to work on in-memory data.
    #[must_use]
    pub fn new(
        source_root: impl Into<String>,
        directories: Vec<ScannedDirectory>,
        vendor_sources: Vec<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            directories,
            vendor_sources,
        }
    }

    /// Directory group names and manifest paths are relative to this
    #[must_use]
    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    /// Visited directories in walk order
    #[must_use]
    pub fn directories(&self) -> &[ScannedDirectory] {
        &self.directories
    }

    /// Number of discovered files, vendor sources excluded
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.directories.iter().map(|d| d.files.len()).sum()
    }

    /// Group files by directory, keeping only the requested classes
    ///
    /// Every visited directory yields a group, even when none of its files
    /// match. When sources are requested a final `vendor` group carries the
    /// vendor list verbatim.
    #[must_use]
    pub fn groups(&self, requested: ClassSet) -> Vec<Group> {
        let mut groups: Vec<Group> = self
            .directories
            .iter()
            .map(|dir| Group {
                name: paths::relative_path(&dir.path, &self.source_root),
                files: dir
                    .files
                    .iter()
                    .filter(|file| requested.contains(file.class))
                    .map(|file| file.path.clone())
                    .collect(),
            })
            .collect();

        if requested.sources {
            groups.push(Group {
                name: VENDOR_GROUP.to_string(),
                files: self.vendor_sources.clone(),
            });
        }

        groups
    }

    /// Every source file needed to compile the library, flattened
    ///
    /// Sources are always included; headers only when `includes` is set.
    #[must_use]
    pub fn all_sources(&self, includes: bool) -> Vec<String> {
        self.groups(ClassSet::new(true, includes))
            .into_iter()
            .flat_map(|group| group.files)
            .collect()
    }
}

/// Walk the layout's scan root under `project_root`
///
/// A missing scan root produces an empty tree; callers that consider that
/// a misconfiguration must check for it themselves.
///
/// # Errors
///
/// Returns an error if traversal fails or a matching path is not UTF-8.
pub fn scan_tree(project_root: &Path, layout: &Layout) -> Result<SourceTree> {
    let classifier = ExtensionClassifier::from_layout(layout);
    let root = project_root.join(&layout.scan_root);

    let directories = walk::walk(project_root, &root, &classifier, layout.sort_entries)?;

    let tree = SourceTree::new(
        layout.source_root.clone(),
        directories,
        layout.vendor_sources.clone(),
    );
    debug!(
        directories = tree.directories().len(),
        files = tree.file_count(),
        "scan complete"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, class: FileClass) -> ClassifiedFile {
        ClassifiedFile {
            path: path.to_string(),
            class,
        }
    }

    fn sample_tree() -> SourceTree {
        SourceTree::new(
            "src",
            vec![
                ScannedDirectory {
                    path: "src/libtcod".to_string(),
                    files: vec![
                        file("src/libtcod/color.c", FileClass::Source),
                        file("src/libtcod/color.h", FileClass::Header),
                    ],
                },
                ScannedDirectory {
                    path: "src/libtcod/gui".to_string(),
                    files: vec![file("src/libtcod/gui/button.hpp", FileClass::Header)],
                },
            ],
            vec!["src/vendor/stb.c".to_string()],
        )
    }

    #[test]
    fn test_groups_headers_only() {
        let groups = sample_tree().groups(ClassSet::HEADERS);
        assert_eq!(
            groups,
            vec![
                Group {
                    name: "libtcod".to_string(),
                    files: vec!["src/libtcod/color.h".to_string()],
                },
                Group {
                    name: "libtcod/gui".to_string(),
                    files: vec!["src/libtcod/gui/button.hpp".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_groups_sources_keep_empty_groups_and_vendor() {
        let groups = sample_tree().groups(ClassSet::SOURCES);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].files, vec!["src/libtcod/color.c"]);
        assert_eq!(groups[1].name, "libtcod/gui");
        assert!(groups[1].files.is_empty());
        assert_eq!(groups[2].name, VENDOR_GROUP);
        assert_eq!(groups[2].files, vec!["src/vendor/stb.c"]);
    }

    #[test]
    fn test_groups_none_requested_has_no_files() {
        let groups = sample_tree().groups(ClassSet::NONE);
        assert!(groups.iter().all(|g| g.files.is_empty()));
        assert!(groups.iter().all(|g| g.name != VENDOR_GROUP));
    }

    #[test]
    fn test_all_sources_flattens_in_order() {
        let tree = sample_tree();
        assert_eq!(
            tree.all_sources(false),
            vec!["src/libtcod/color.c", "src/vendor/stb.c"]
        );
        assert_eq!(
            tree.all_sources(true),
            vec![
                "src/libtcod/color.c",
                "src/libtcod/color.h",
                "src/libtcod/gui/button.hpp",
                "src/vendor/stb.c",
            ]
        );
    }

    #[test]
    fn test_file_count_excludes_vendor() {
        assert_eq!(sample_tree().file_count(), 3);
    }
}
