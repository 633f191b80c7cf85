//! PDF Text Dumper Module
//!
//! Prints the text content of PDF documents, one page at a time.

pub mod dump;
pub mod extract;

pub use dump::{display_name, dump_documents, DocumentOutcome, DumpReport};
pub use extract::{PageExtractor, PdfExtractor};
