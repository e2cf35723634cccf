//! Configuration validation and error reporting

use super::types::Config;
use crate::error::{GeneratorError, Result};
use crate::scanner::paths::is_within;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] describing the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        let layout = &config.layout;
        let outputs = &config.outputs;

        for ext in layout.source_extensions.iter().chain(&layout.header_extensions) {
            if ext.is_empty() {
                return Err(invalid("extensions cannot be empty"));
            }
            if ext.contains('.') {
                return Err(invalid(format!("extension {ext:?} must not contain '.'")));
            }
        }

        if let Some(shared) = layout
            .source_extensions
            .iter()
            .find(|ext| layout.header_extensions.contains(ext))
        {
            return Err(invalid(format!(
                "extension {shared:?} is listed as both source and header"
            )));
        }

        if layout.scan_root.trim().is_empty() {
            return Err(invalid("scan_root cannot be empty"));
        }

        if !is_within(&layout.scan_root, &layout.source_root) {
            return Err(invalid(format!(
                "scan_root {:?} must be inside source_root {:?}",
                layout.scan_root, layout.source_root
            )));
        }

        if outputs.automake.trim().is_empty() || outputs.cmake.trim().is_empty() {
            return Err(invalid("output paths cannot be empty"));
        }

        if outputs.automake == outputs.cmake {
            return Err(invalid("automake and cmake outputs must be different files"));
        }

        if !outputs.banner.starts_with('#') || outputs.banner.contains('\n') {
            return Err(invalid("banner must be a single line starting with '#'"));
        }

        if outputs.automake_sources_var.trim().is_empty() || outputs.cmake_target.trim().is_empty() {
            return Err(invalid("automake_sources_var and cmake_target cannot be empty"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    GeneratorError::InvalidConfig(message.into()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(config: &Config) {
        let err = ConfigValidator::validate(config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let mut config = Config::default();
        config.layout.source_extensions.push(".cc".to_string());
        assert_invalid(&config);
    }

    #[test]
    fn test_shared_extension_rejected() {
        let mut config = Config::default();
        config.layout.header_extensions.push("cpp".to_string());
        assert_invalid(&config);
    }

    #[test]
    fn test_scan_root_outside_source_root_rejected() {
        let mut config = Config::default();
        config.layout.scan_root = "lib/libtcod".to_string();
        assert_invalid(&config);
    }

    #[test]
    fn test_scan_root_equal_to_source_root_allowed() {
        let mut config = Config::default();
        config.layout.scan_root = "src".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_banner_must_be_comment() {
        let mut config = Config::default();
        config.outputs.banner = "generated".to_string();
        assert_invalid(&config);
    }

    #[test]
    fn test_same_output_rejected() {
        let mut config = Config::default();
        config.outputs.cmake = config.outputs.automake.clone();
        assert_invalid(&config);
    }
}
