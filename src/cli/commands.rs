//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::DEFAULT_PDF_PATHS;
use crate::error::Result;
use crate::pdf::{dump_documents, DumpReport, PdfExtractor};
use crate::tone::{write_tone_file, ToneParams, ToneSummary};

/// Synthesize the chime and write it to `output`.
pub fn chime(output: &Path, params_file: Option<&Path>) -> Result<ToneSummary> {
    let params = match params_file {
        Some(file) => {
            info!("Loading tone parameters from: {}", file.display());
            ToneParams::from_json_file(file)?
        }
        None => ToneParams::default(),
    };

    info!(
        "Synthesizing {:.1} Hz tone, {:.2}s at {} Hz",
        params.frequency_hz, params.duration_secs, params.sample_rate
    );

    let summary = write_tone_file(output, &params)?;
    info!("SHA-256: {}", summary.checksum);

    println!("Generated custom sound at {}", summary.path.display());

    Ok(summary)
}

/// Dump the text of each document to stdout.
///
/// Falls back to the built-in document list when `paths` is empty.
pub fn pdf_dump(paths: &[PathBuf]) -> Result<DumpReport> {
    let paths: Vec<PathBuf> = if paths.is_empty() {
        DEFAULT_PDF_PATHS.iter().map(PathBuf::from).collect()
    } else {
        paths.to_vec()
    };

    info!("Dumping {} document(s)", paths.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = dump_documents(&mut out, &PdfExtractor::new(), &paths)?;

    if report.problem_count() > 0 {
        warn!(
            "{} of {} document(s) could not be dumped",
            report.problem_count(),
            report.outcomes.len()
        );
    }

    Ok(report)
}
