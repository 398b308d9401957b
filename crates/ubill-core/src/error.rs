//! Error types for the ubill-core library.

use thiserror::Error;

use crate::bill::Field;

/// Main error type for the ubill library.
#[derive(Error, Debug)]
pub enum UbillError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The document yielded too little text for text-based processing
    /// (likely a scanned document).
    #[error("document has too little extractable text ({found} chars, need {min})")]
    NoText { found: usize, min: usize },

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to field extraction.
///
/// Field-not-found and malformed-token conditions are recoverable and
/// stay inside the session (they become prompt requests or skipped
/// candidates); these variants exist for callers that drive the
/// recognizers directly.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No value could be recognized for a field on a page.
    #[error("no {field} found on page {page}")]
    NotFound { field: Field, page: u32 },

    /// A candidate token could not be parsed as the field's type.
    #[error("failed to parse {field}: {value}")]
    Parse { field: Field, value: String },

    /// Table structure could not be located (no header keyword or no
    /// data rows). Triggers the Automatic -> Manual mode transition.
    #[error("structural failure: {0}")]
    Structural(String),
}

/// Result type for the ubill library.
pub type Result<T> = std::result::Result<T, UbillError>;
