//! Configuration types and structures

use serde::{Deserialize, Serialize};

/// Banner written as the first line of every generated manifest
pub const DEFAULT_BANNER: &str =
    "# This file was automatically generated by scripts/update_sources.py";

/// Third-party sources compiled into the library but not found by the walk
pub const DEFAULT_VENDOR_SOURCES: [&str; 4] = [
    "src/vendor/glad.c",
    "src/vendor/lodepng.c",
    "src/vendor/stb.c",
    "src/vendor/utf8proc/utf8proc.c",
];

/// Where the library lives and which files belong to it.
///
/// Paths are forward-slash strings relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Directory group names and manifest paths are expressed relative to
    pub source_root: String,

    /// Directory walked for sources and headers
    pub scan_root: String,

    /// Extensions classified as sources (without the dot, case-sensitive)
    pub source_extensions: Vec<String>,

    /// Extensions classified as headers (without the dot, case-sensitive)
    pub header_extensions: Vec<String>,

    /// Sources appended verbatim as the `vendor` group
    pub vendor_sources: Vec<String>,

    /// Sort directory entries by name instead of keeping filesystem order
    pub sort_entries: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_root: "src".to_string(),
            scan_root: "src/libtcod".to_string(),
            source_extensions: vec!["c".to_string(), "cpp".to_string()],
            header_extensions: vec!["h".to_string(), "hpp".to_string()],
            vendor_sources: DEFAULT_VENDOR_SOURCES.iter().map(ToString::to_string).collect(),
            sort_entries: false,
        }
    }
}

/// Generated files and the names used inside them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Outputs {
    /// First line of each manifest
    pub banner: String,

    /// Automake fragment path
    pub automake: String,

    /// CMake fragment path
    pub cmake: String,

    /// Automake variable holding the consolidated source list
    pub automake_sources_var: String,

    /// CMake target receiving `target_sources`
    pub cmake_target: String,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            automake: "buildsys/autotools/sources.am".to_string(),
            cmake: "src/sources.cmake".to_string(),
            automake_sources_var: "libtcod_la_SOURCES".to_string(),
            cmake_target: "TCOD".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Source tree layout
    pub layout: Layout,

    /// Output manifests
    pub outputs: Outputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.layout.scan_root, "src/libtcod");
        assert_eq!(config.layout.source_root, "src");
        assert_eq!(config.layout.vendor_sources.len(), 4);
        assert_eq!(config.outputs.cmake, "src/sources.cmake");
        assert!(!config.layout.sort_entries);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [layout]
            scan_root = "src/mylib"
            vendor_sources = []

            [outputs]
            cmake_target = "MYLIB"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.scan_root, "src/mylib");
        assert!(config.layout.vendor_sources.is_empty());
        assert_eq!(config.layout.source_extensions, vec!["c", "cpp"]);
        assert_eq!(config.outputs.cmake_target, "MYLIB");
        assert_eq!(config.outputs.banner, DEFAULT_BANNER);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Config, _> = toml::from_str("[layout]\nscan_rot = \"x\"\n");
        assert!(result.is_err());
    }
}
