//! Promo Tools - asset helpers for the mobile app
//!
//! Two independent utilities:
//! 1. Tone Generator - synthesizes the promo notification chime as a WAV file
//! 2. PDF Text Dumper - prints the text of reference PDFs page by page

pub mod cli;
pub mod config;
pub mod error;
pub mod pdf;
pub mod tone;

pub use error::{Result, ToolError};
