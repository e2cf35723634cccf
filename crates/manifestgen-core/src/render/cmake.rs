//! CMake fragment: one `target_sources` block plus `source_group` blocks

use tracing::warn;

use super::join_lines;
use crate::config::Outputs;
use crate::scanner::paths::relative_path;
use crate::scanner::{ClassSet, SourceTree};

const INDENT: &str = "\n    ";

/// Render the CMake fragment
///
/// `target_sources` lists every source and header; each directory then
/// gets a `source_group` built from the combined sources+headers grouping,
/// with `/` in the group name written as an escaped `\\` separator. Paths
/// are relative to the source root, where the fragment lives.
#[must_use]
pub fn render_cmake(tree: &SourceTree, outputs: &Outputs) -> String {
    let source_root = tree.source_root();
    let relocate = |file: String| relative_path(&file, source_root);

    let files = tree.all_sources(true);
    if files.is_empty() {
        warn!(output = %outputs.cmake, "no sources to list");
    }

    let mut out = outputs.banner.clone();
    out.push_str(&format!("\ntarget_sources({} PRIVATE", outputs.cmake_target));
    out.push_str(&join_lines(files.into_iter().map(relocate), INDENT, ""));
    out.push_str("\n)");

    for group in tree.groups(ClassSet::ALL) {
        let name = group.name.replace('/', r"\\");
        out.push_str(&format!("\nsource_group({name} FILES"));
        out.push_str(&join_lines(group.files.into_iter().map(relocate), INDENT, ""));
        out.push_str("\n)");
    }

    out.push('\n');
    out
}
