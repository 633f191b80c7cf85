//! Document dump loop
//!
//! Prints the text of each document page by page. Every document is handled
//! in isolation: a missing or unreadable file is reported in the output and
//! the loop moves on. Only a failure of the output sink itself stops the run.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::pdf::extract::PageExtractor;

/// Width of the `=` rule printed around each file header
pub const SEPARATOR_WIDTH: usize = 80;

/// What happened to a single input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Text was printed for every page
    Dumped { pages: usize },
    /// Nothing exists at the path
    NotFound,
    /// The file exists but could not be read as a PDF
    Failed { reason: String },
}

/// Per-document outcomes of a dump run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpReport {
    pub outcomes: Vec<(PathBuf, DocumentOutcome)>,
}

impl DumpReport {
    /// Number of documents whose text was printed
    pub fn dumped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, DocumentOutcome::Dumped { .. }))
            .count()
    }

    /// Number of documents that were missing or failed to parse
    pub fn problem_count(&self) -> usize {
        self.outcomes.len() - self.dumped_count()
    }
}

/// Display name of a path
///
/// Splits on both `/` and `\` so Windows-style paths show just the file name
/// on every platform.
pub fn display_name(path: &Path) -> String {
    let full = path.to_string_lossy();
    let name = full
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(&full);
    name.to_string()
}

/// Print the text of each document in `paths` to `out`
///
/// # Errors
/// Only I/O errors from `out` are returned; problems with individual
/// documents are printed and recorded in the report instead.
pub fn dump_documents<W, E, P>(out: &mut W, extractor: &E, paths: &[P]) -> io::Result<DumpReport>
where
    W: Write,
    E: PageExtractor + ?Sized,
    P: AsRef<Path>,
{
    let mut report = DumpReport::default();

    for path in paths {
        let path = path.as_ref();
        let outcome = dump_document(out, extractor, path)?;
        report.outcomes.push((path.to_path_buf(), outcome));
    }

    out.flush()?;
    Ok(report)
}

fn dump_document<W, E>(out: &mut W, extractor: &E, path: &Path) -> io::Result<DocumentOutcome>
where
    W: Write,
    E: PageExtractor + ?Sized,
{
    let rule = "=".repeat(SEPARATOR_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "FILE: {}", display_name(path))?;
    writeln!(out, "{}", rule)?;

    if !path.exists() {
        warn!("Skipping missing document: {}", path.display());
        writeln!(out, "File not found: {}", path.display())?;
        return Ok(DocumentOutcome::NotFound);
    }

    let pages = match extractor.extract_pages(path) {
        Ok(pages) => pages,
        Err(e) => {
            warn!("Failed to extract {}: {}", path.display(), e);
            writeln!(out, "Error reading {}: {}", path.display(), e)?;
            return Ok(DocumentOutcome::Failed {
                reason: e.to_string(),
            });
        }
    };

    debug!("{}: {} pages", path.display(), pages.len());
    for (i, text) in pages.iter().enumerate() {
        writeln!(out, "-- Page {} --", i + 1)?;
        writeln!(out, "{}", text.trim())?;
    }

    Ok(DocumentOutcome::Dumped { pages: pages.len() })
}
