//! Unified diffs between the manifest on disk and a fresh render

use similar::TextDiff;

const DIFF_CONTEXT_LINES: usize = 3;

/// Unified diff turning `current` into `expected`
#[must_use]
pub fn unified_diff(current: &str, expected: &str, label: &str) -> String {
    TextDiff::from_lines(current, expected)
        .unified_diff()
        .context_radius(DIFF_CONTEXT_LINES)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}
