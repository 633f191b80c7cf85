//! Promo Tools CLI
//!
//! Command-line entry point for the chime generator and PDF dumper.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use promo_tools::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("Promo Tools v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Chime { output, params } => {
            commands::chime(&output, params.as_deref())
                .with_context(|| format!("failed to generate chime at {}", output.display()))?;
        }
        Commands::PdfDump { paths } => {
            commands::pdf_dump(&paths).context("failed to write document text")?;
        }
    }

    Ok(())
}
