use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Keep Automake and CMake source manifests in sync with the source tree
///
/// With no arguments, discovers the project root, scans the library sources
/// and overwrites both generated manifests.
#[derive(Parser, Debug)]
#[command(name = "manifestgen")]
#[command(long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root (default: nearest ancestor holding the scan root)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore manifestgen.toml and use built-in defaults
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Verify the manifests are up to date without writing them
    #[arg(long, conflicts_with_all = ["stdout", "show_config"])]
    pub check: bool,

    /// Print one rendered manifest instead of writing files
    #[arg(long, value_enum, value_name = "FORMAT", conflicts_with = "show_config")]
    pub stdout: Option<ManifestFormat>,

    /// Print the effective configuration as TOML
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ManifestFormat {
    /// Automake fragment
    Automake,
    /// CMake fragment
    Cmake,
}
