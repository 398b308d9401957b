//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text content of a single page.
///
/// `lines` is the layout-preserving text extraction (horizontal spacing
/// approximates column alignment). `table` is an optional decoded cell
/// grid; sources that can recover table structure may populate it, and
/// the energy recognizer prefers it over the positional heuristic.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Ordered, non-empty text lines for the page.
    pub lines: Vec<String>,
    /// Decoded table as rows of cell strings, if the source provides one.
    pub table: Option<Vec<Vec<String>>>,
}

impl PageContent {
    /// Build page content from text lines only.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            table: None,
        }
    }
}

/// Trait for page-by-page line sources.
///
/// The extraction core consumes only this interface; anything that can
/// hand out ordered text lines per page can drive a session.
pub trait LineSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Content of a specific page (1-indexed).
    fn page_content(&self, page: u32) -> Result<PageContent>;
}
