//! # manifestgen-core
//!
//! Core library for keeping build-system source manifests in sync with a
//! library's source tree.
//!
//! The pipeline runs one way:
//! - `scanner`: walks the scan root once, classifying files as sources or
//!   headers and grouping them by directory
//! - `render`: turns the grouped tree into an Automake fragment and a
//!   CMake fragment
//! - `generate`: orchestrates scan, render and atomic writes (or checks)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod generate;
pub mod render;
pub mod scanner;

pub use config::{Config, ConfigDiscovery, ConfigValidator, Layout, Outputs};
pub use error::{GeneratorError, Result};
pub use generate::{Generator, ManifestKind, Mode, OutputStatus, RenderedManifest, Report};
pub use scanner::{ClassSet, ExtensionClassifier, FileClass, Group, SourceTree};
