//! File classification by extension

use crate::config::Layout;

/// Class a scanned file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileClass {
    /// Compiled translation unit (`.c`, `.cpp`)
    Source,
    /// Installed header (`.h`, `.hpp`)
    Header,
}

/// Which file classes a scan asks for
///
/// The two toggles are independent; [`ClassSet::NONE`] matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    /// Include source files
    pub sources: bool,
    /// Include header files
    pub headers: bool,
}

impl ClassSet {
    /// Nothing requested
    pub const NONE: Self = Self::new(false, false);
    /// Sources only
    pub const SOURCES: Self = Self::new(true, false);
    /// Headers only
    pub const HEADERS: Self = Self::new(false, true);
    /// Sources and headers
    pub const ALL: Self = Self::new(true, true);

    /// Build a class set from the two toggles
    #[must_use]
    pub const fn new(sources: bool, headers: bool) -> Self {
        Self { sources, headers }
    }

    /// Check if `class` was requested
    #[must_use]
    pub const fn contains(self, class: FileClass) -> bool {
        match class {
            FileClass::Source => self.sources,
            FileClass::Header => self.headers,
        }
    }
}

/// Extension-based classifier for file names
///
/// The extension is everything after the final `.` and must equal a
/// registered extension exactly, so `bar.C` and `bar.cpp~` never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionClassifier {
    source_extensions: Vec<String>,
    header_extensions: Vec<String>,
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self::from_layout(&Layout::default())
    }
}

impl ExtensionClassifier {
    /// Create a classifier from explicit extension lists
    #[must_use]
    pub const fn new(source_extensions: Vec<String>, header_extensions: Vec<String>) -> Self {
        Self {
            source_extensions,
            header_extensions,
        }
    }

    /// Create a classifier using the layout's extension lists
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(
            layout.source_extensions.clone(),
            layout.header_extensions.clone(),
        )
    }

    /// Classify a file name, or `None` if it is neither source nor header
    #[must_use]
    pub fn classify(&self, file_name: &str) -> Option<FileClass> {
        let (_, extension) = file_name.rsplit_once('.')?;

        if self.source_extensions.iter().any(|ext| ext == extension) {
            Some(FileClass::Source)
        } else if self.header_extensions.iter().any(|ext| ext == extension) {
            Some(FileClass::Header)
        } else {
            None
        }
    }

    /// Check if a file name belongs to one of the requested classes
    #[must_use]
    pub fn matches(&self, file_name: &str, requested: ClassSet) -> bool {
        self.classify(file_name)
            .is_some_and(|class| requested.contains(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_extensions() {
        let classifier = ExtensionClassifier::default();
        assert_eq!(classifier.classify("bar.c"), Some(FileClass::Source));
        assert_eq!(classifier.classify("bar.cpp"), Some(FileClass::Source));
        assert_eq!(classifier.classify("bar.h"), Some(FileClass::Header));
        assert_eq!(classifier.classify("bar.hpp"), Some(FileClass::Header));
    }

    #[test]
    fn test_extension_match_is_exact_and_case_sensitive() {
        let classifier = ExtensionClassifier::default();
        for name in ["bar.txt", "bar.C", "bar.cpp~", "bar.H", "bar.cc", "Makefile", "c", "bar.c.orig"] {
            assert_eq!(classifier.classify(name), None, "{name} should not classify");
            assert!(!classifier.matches(name, ClassSet::ALL));
        }
    }

    #[test]
    fn test_only_final_extension_counts() {
        let classifier = ExtensionClassifier::default();
        assert_eq!(classifier.classify("archive.h.c"), Some(FileClass::Source));
        assert_eq!(classifier.classify(".c"), Some(FileClass::Source));
    }

    #[test]
    fn test_requested_classes_are_independent() {
        let classifier = ExtensionClassifier::default();
        assert!(classifier.matches("bar.c", ClassSet::SOURCES));
        assert!(!classifier.matches("bar.c", ClassSet::HEADERS));
        assert!(classifier.matches("bar.h", ClassSet::HEADERS));
        assert!(!classifier.matches("bar.h", ClassSet::SOURCES));
        assert!(classifier.matches("bar.hpp", ClassSet::ALL));
    }

    #[test]
    fn test_empty_request_matches_nothing() {
        let classifier = ExtensionClassifier::default();
        for name in ["bar.c", "bar.cpp", "bar.h", "bar.hpp", "bar.txt"] {
            assert!(!classifier.matches(name, ClassSet::NONE));
        }
    }

    #[test]
    fn test_custom_extensions() {
        let classifier =
            ExtensionClassifier::new(vec!["cc".to_string()], vec!["hh".to_string()]);
        assert_eq!(classifier.classify("x.cc"), Some(FileClass::Source));
        assert_eq!(classifier.classify("x.hh"), Some(FileClass::Header));
        assert_eq!(classifier.classify("x.c"), None);
    }
}
