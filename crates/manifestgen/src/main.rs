mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::GenerateOptions;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose only changes the fallback filter
    let default_filter = if cli.verbose {
        "warn,manifestgen=debug,manifestgen_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let options = GenerateOptions::new(
        cli.project_root.as_deref(),
        cli.config.as_deref(),
        cli.no_config,
    );
    let generator = options
        .generator()
        .context("Failed to set up manifest generation")?;

    if cli.show_config {
        commands::ShowConfig::execute(&generator, cli.verbose)
            .context("Failed to show configuration")?;
    } else if let Some(format) = cli.stdout {
        commands::Print::execute(&generator, format)
            .context("Failed to render manifest")?;
    } else if cli.check {
        commands::Check::execute(&generator).context("Manifest check failed")?;
    } else {
        commands::Generate::execute(&generator, cli.verbose)
            .context("Failed to generate manifests")?;
    }

    Ok(())
}
