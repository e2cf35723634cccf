//! Manifest rendering
//!
//! Both renderers are pure: they take a scanned [`SourceTree`] plus output
//! settings and return the whole manifest text, which is then written in
//! one piece.
//!
//! [`SourceTree`]: crate::scanner::SourceTree

mod automake;
mod cmake;

pub use automake::render_automake;
pub use cmake::render_cmake;

/// Join items as continuation lines, each prefixed with `indent`
///
/// An empty item list still produces the leading `indent`, matching what
/// existing checked-in manifests contain for directories without files.
fn join_lines<I>(items: I, indent: &str, separator: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let items: Vec<String> = items.into_iter().collect();
    format!("{indent}{}", items.join(&format!("{separator}{indent}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines() {
        let joined = join_lines(vec!["a".to_string(), "b".to_string()], "\n\t", " \\");
        assert_eq!(joined, "\n\ta \\\n\tb");
    }

    #[test]
    fn test_join_lines_empty() {
        assert_eq!(join_lines(Vec::new(), "\n    ", ""), "\n    ");
    }
}
