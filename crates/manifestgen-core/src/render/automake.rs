//! Automake fragment: per-directory header installs plus one source list

use tracing::warn;

use super::join_lines;
use crate::config::Outputs;
use crate::scanner::paths::relative_path;
use crate::scanner::{ClassSet, SourceTree};

/// Render the Automake fragment
///
/// Each directory gets an `<id>_includedir`/`<id>_include_HEADERS` pair
/// built from a headers-only grouping, where `<id>` is the group name with
/// `/` replaced by `_`. A single consolidated source variable follows.
/// Paths are made relative to the fragment's own directory so they resolve
/// from wherever Automake includes it.
#[must_use]
pub fn render_automake(tree: &SourceTree, outputs: &Outputs) -> String {
    let prefix = project_prefix(&outputs.automake);
    let relocate = |file: String| format!("{prefix}{file}");

    let mut out = format!("{}\n", outputs.banner);

    for group in tree.groups(ClassSet::HEADERS) {
        let include_name = group.name.replace('/', "_");
        out.push_str(&format!(
            "\n{include_name}_includedir = $(includedir)/{}",
            group.name
        ));
        out.push_str(&format!("\n{include_name}_include_HEADERS = \\"));
        out.push_str(&join_lines(group.files.into_iter().map(relocate), "\n\t", " \\"));
        out.push('\n');
    }

    let sources = tree.all_sources(false);
    if sources.is_empty() {
        warn!(output = %outputs.automake, "no sources to list");
    }

    out.push_str(&format!("\n{} = \\", outputs.automake_sources_var));
    out.push_str(&join_lines(sources.into_iter().map(relocate), "\n\t", " \\"));
    out.push('\n');
    out
}

/// Prefix leading from the fragment's directory back to the project root
fn project_prefix(output: &str) -> String {
    let dir = output.rsplit_once('/').map_or("", |(dir, _)| dir);
    match relative_path(".", dir).as_str() {
        "." => String::new(),
        up => format!("{up}/"),
    }
}
