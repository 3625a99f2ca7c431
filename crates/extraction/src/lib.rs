//! Document text extraction
//!
//! Turns uploaded bytes into the raw text the analysis pipeline consumes.
//! Supports PDF (via `pdf-extract`), DOCX (via `docx-lite`) and UTF-8 plain
//! text. Format is taken from the client-supplied MIME tag when recognized,
//! with magic-byte sniffing as the fallback.
//!
//! Extraction failures are fatal for the affected document: there is no
//! partial analysis of a contract that could not be read.

mod document;

pub use document::{extract, extract_text, sniff_format, ExtractedDocument};

use thiserror::Error;

/// Errors raised while turning uploaded bytes into text
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Empty upload")]
    EmptyUpload,

    #[error("File too large ({size} bytes, maximum {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported document format")]
    UnsupportedFormat,

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Text decoding failed: {0}")]
    Encoding(String),
}

impl From<ExtractionError> for contract_analyzer_core::Error {
    fn from(err: ExtractionError) -> Self {
        contract_analyzer_core::Error::Extraction(err.to_string())
    }
}
