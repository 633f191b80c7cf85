//! CLI Module
//!
//! Command-line interface for the promo tools. Every argument is optional;
//! with none given each command reproduces the built-in defaults.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CHIME_PATH;

/// Promo Tools - chime synthesis and PDF text dumping
#[derive(Parser, Debug)]
#[command(name = "promo-tools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the notification chime WAV file
    #[command(name = "chime")]
    Chime {
        /// Where to write the WAV file
        #[arg(short, long, default_value = DEFAULT_CHIME_PATH)]
        output: PathBuf,

        /// JSON file overriding the tone parameters
        #[arg(short, long)]
        params: Option<PathBuf>,
    },

    /// Print the text of PDF documents page by page
    #[command(name = "pdf-dump")]
    PdfDump {
        /// Documents to dump (defaults to the course handouts)
        paths: Vec<PathBuf>,
    },
}
