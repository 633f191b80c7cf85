//! PDF text extraction
//!
//! Wraps the pdf-extract crate. Malformed documents can make the parser
//! panic instead of returning an error, so extraction runs under
//! `catch_unwind` and both cases surface as `ToolError::PdfParse`.

use std::any::Any;
use std::fs;
use std::panic;
use std::path::Path;

use log::debug;

use crate::error::{Result, ToolError};

/// Source of per-page text for a document on disk
pub trait PageExtractor {
    /// Extract the text of every page, in document order
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Page extractor backed by pdf-extract
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        PdfExtractor
    }

    /// Extract page text from an in-memory PDF
    ///
    /// `label` is only used in error messages.
    pub fn extract_from_bytes(&self, bytes: &[u8], label: &str) -> Result<Vec<String>> {
        let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));

        match outcome {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ToolError::PdfParse {
                path: label.to_string(),
                reason: e.to_string(),
            }),
            Err(payload) => Err(ToolError::PdfParse {
                path: label.to_string(),
                reason: format!("parser panicked: {}", panic_message(payload.as_ref())),
            }),
        }
    }
}

impl PageExtractor for PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(ToolError::FileNotFound {
                path: path.display().to_string(),
                source: None,
            });
        }

        let bytes = fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        self.extract_from_bytes(&bytes, &path.display().to_string())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
