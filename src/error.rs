//! Error handling for promo-tools
//!
//! One error type covers both tools. The PDF dumper treats every variant as
//! a per-file failure; the tone generator propagates everything to `main`.

use thiserror::Error;

/// Result type alias for promo-tools operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Main error type for promo-tools operations
#[derive(Error, Debug)]
pub enum ToolError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    // PDF Errors
    #[error("Failed to parse PDF: {reason}")]
    PdfParse { path: String, reason: String },

    // Tone Errors
    #[error("Invalid tone parameters: {reason}")]
    InvalidToneParams { reason: String },

    #[error("Failed to write WAV file {path}: {source}")]
    AudioWriteError {
        path: String,
        #[source]
        source: hound::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ToolError::PdfParse { .. } => "PDF_PARSE",
            ToolError::InvalidToneParams { .. } => "INVALID_TONE_PARAMS",
            ToolError::AudioWriteError { .. } => "AUDIO_WRITE_ERROR",
            ToolError::Io(_) => "IO_ERROR",
            ToolError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors are confined to a single input document; the
    /// dump loop reports them and moves on to the next path.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ToolError::FileNotFound { .. } | ToolError::PdfParse { .. }
        )
    }
}
