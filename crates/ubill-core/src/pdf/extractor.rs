//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{LineSource, PageContent, Result};
use crate::error::PdfError;

/// PDF line source backed by lopdf + pdf-extract.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    min_text_length: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            min_text_length: 0,
        }
    }

    /// Require at least this much extracted text before the document
    /// is treated as text-based (0 disables the check). Scanned
    /// documents typically extract to almost nothing and fail here
    /// instead of producing empty pages.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Load a PDF from bytes.
    ///
    /// Rejects encrypted documents (after trying the empty password)
    /// and documents with zero pages.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Extract text from the entire PDF.
    pub fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        check_text_length(&text, self.min_text_length)?;
        Ok(text)
    }

    /// Extract the non-empty text lines of a specific page (1-indexed).
    ///
    /// pdf-extract separates pages with form feeds; when the form-feed
    /// count does not match the page count the text is split
    /// proportionally by line instead.
    pub fn page_lines(&self, page: u32) -> Result<Vec<String>> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page));
        }

        let full_text = self.extract_text()?;

        let chunks: Vec<&str> = full_text.split('\u{c}').collect();
        let page_text = if chunks.len() == page_count as usize {
            chunks[(page - 1) as usize].to_string()
        } else {
            proportional_page_text(&full_text, page, page_count)
        };

        Ok(non_empty_lines(&page_text))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn page_content(&self, page: u32) -> Result<PageContent> {
        Ok(PageContent {
            lines: self.page_lines(page)?,
            // Structural table decoding is out of scope for the PDF
            // backend; only the text-line shape is produced.
            table: None,
        })
    }
}

/// Split the full document text into an even per-page share of lines.
fn proportional_page_text(full_text: &str, page: u32, page_count: u32) -> String {
    let lines: Vec<&str> = full_text.lines().collect();
    let lines_per_page = lines.len() / page_count.max(1) as usize;

    let start = ((page - 1) as usize) * lines_per_page;
    let end = if page == page_count {
        lines.len()
    } else {
        (page as usize) * lines_per_page
    };

    lines[start.min(lines.len())..end.min(lines.len())].join("\n")
}

/// Reject documents whose extracted text falls below the configured
/// minimum (0 disables the check).
fn check_text_length(text: &str, min: usize) -> std::result::Result<(), PdfError> {
    let found = text.trim().len();
    if found < min {
        return Err(PdfError::NoText { found, min });
    }
    Ok(())
}

/// Drop blank/whitespace-only lines, preserving order.
fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_empty_lines() {
        let text = "first\n\n   \nsecond\n\t\nthird";
        assert_eq!(non_empty_lines(text), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_proportional_split_even() {
        let text = "a\nb\nc\nd";
        assert_eq!(proportional_page_text(text, 1, 2), "a\nb");
        assert_eq!(proportional_page_text(text, 2, 2), "c\nd");
    }

    #[test]
    fn test_proportional_split_remainder_goes_to_last_page() {
        let text = "a\nb\nc\nd\ne";
        assert_eq!(proportional_page_text(text, 1, 2), "a\nb");
        assert_eq!(proportional_page_text(text, 2, 2), "c\nd\ne");
    }

    #[test]
    fn test_text_length_gate() {
        assert!(check_text_length("plenty of text on this bill", 5).is_ok());
        assert!(check_text_length("", 0).is_ok());

        let err = check_text_length("hi", 5).unwrap_err();
        assert!(matches!(err, PdfError::NoText { found: 2, min: 5 }));
    }

    #[test]
    fn test_empty_extractor_has_no_pages() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.page_count(), 0);
    }
}
