//! Extraction session: mode controller plus page record assembler.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Field;
use super::prompt::ValuePrompt;
use super::rules;
use crate::error::Result;
use crate::models::record::PageRecord;
use crate::pdf::{LineSource, PageContent};
use rust_decimal::Decimal;

/// Total-energy resolution policy.
///
/// Document-global: every page's energy recognizer reads it, and only
/// the failure transition writes it. The transition is one-directional
/// within a run; there is no recovery back to automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Structural inference over the page's lines.
    #[default]
    Automatic,
    /// Every total is requested from the operator; no line scanning.
    Manual,
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionMode::Automatic => f.write_str("automatic"),
            ExtractionMode::Manual => f.write_str("manual"),
        }
    }
}

/// A single document run: sequential page traversal, one [`PageRecord`]
/// per page.
///
/// The session owns the mode token for the run and the prompt used to
/// resolve fields the heuristics cannot. A field that fails to resolve
/// never aborts its page; the record is produced regardless, with the
/// field absent (or the name sentinel).
pub struct Session<P: ValuePrompt> {
    mode: ExtractionMode,
    transitioned: bool,
    prompt: P,
    unknown_name: String,
    max_pages: usize,
}

impl<P: ValuePrompt> Session<P> {
    /// Create a session with the upfront mode choice.
    pub fn new(mode: ExtractionMode, prompt: P) -> Self {
        Self {
            mode,
            transitioned: false,
            prompt,
            unknown_name: "Unknown Name".to_string(),
            max_pages: 0,
        }
    }

    /// Set the sentinel used when no name can be resolved.
    pub fn with_unknown_name(mut self, name: impl Into<String>) -> Self {
        self.unknown_name = name.into();
        self
    }

    /// Limit the number of pages processed (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Current extraction mode.
    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Whether the automatic -> manual failure transition fired.
    pub fn transitioned(&self) -> bool {
        self.transitioned
    }

    /// Process every page of a document in traversal order.
    ///
    /// A document with zero pages is a fatal run-level failure; any
    /// other failure stays scoped to its field and page.
    pub fn process_document(&mut self, source: &dyn LineSource) -> Result<Vec<PageRecord>> {
        self.process_document_with(source, |_, _| {})
    }

    /// Like [`Session::process_document`], invoking `on_page(page, limit)`
    /// before each page is processed. Lets frontends drive progress
    /// display without re-implementing the traversal.
    pub fn process_document_with<F>(
        &mut self,
        source: &dyn LineSource,
        mut on_page: F,
    ) -> Result<Vec<PageRecord>>
    where
        F: FnMut(u32, u32),
    {
        let page_count = source.page_count();
        if page_count == 0 {
            return Err(crate::error::PdfError::NoPages.into());
        }

        let limit = if self.max_pages == 0 {
            page_count
        } else {
            page_count.min(self.max_pages as u32)
        };

        let mut records = Vec::with_capacity(limit as usize);
        for page in 1..=limit {
            on_page(page, limit);
            let content = source.page_content(page)?;
            records.push(self.process_page(page, &content));
        }

        Ok(records)
    }

    /// Assemble the record for one page.
    ///
    /// The four recognizers run independently; no field's failure
    /// prevents the others from resolving.
    pub fn process_page(&mut self, page_number: u32, content: &PageContent) -> PageRecord {
        let month = self.resolve_month(page_number, &content.lines);
        let year = self.resolve_year(page_number, &content.lines);
        let name = self.resolve_name(page_number, &content.lines);
        let total_energy = self.resolve_energy(page_number, content);

        debug!(
            "page {}: month={:?} year={:?} name={:?} total_energy={:?}",
            page_number, month, year, name, total_energy
        );

        PageRecord {
            page_number,
            month,
            year,
            name,
            total_energy,
        }
    }

    fn resolve_month(&mut self, page: u32, lines: &[String]) -> Option<String> {
        if let Some(month) = rules::find_month(lines) {
            return Some(month);
        }

        warn!("page {}: no month found, requesting manual value", page);
        self.prompt
            .request_text(page, Field::Month)
            .and_then(|reply| normalize_month_reply(&reply))
    }

    fn resolve_year(&mut self, page: u32, lines: &[String]) -> Option<i32> {
        if let Some(year) = rules::find_year(lines) {
            return Some(year);
        }

        warn!("page {}: no year found, requesting manual value", page);
        self.prompt
            .request_text(page, Field::Year)
            .and_then(|reply| reply.trim().parse::<i32>().ok())
            .filter(|year| (2000..=2099).contains(year))
    }

    fn resolve_name(&mut self, page: u32, lines: &[String]) -> String {
        match rules::find_name(lines) {
            Some(name) if !name.trim().is_empty() => return name,
            Some(_) => warn!("page {}: name label has empty value, requesting manual value", page),
            None => warn!("page {}: no name found, requesting manual value", page),
        }

        match self.prompt.request_text(page, Field::Name) {
            Some(reply) if !reply.trim().is_empty() => reply.trim().to_string(),
            _ => self.unknown_name.clone(),
        }
    }

    fn resolve_energy(&mut self, page: u32, content: &PageContent) -> Option<Decimal> {
        if self.mode == ExtractionMode::Automatic {
            let attempt = match &content.table {
                Some(table) => rules::find_total_energy_in_table(table)
                    .or_else(|_| rules::find_total_energy(&content.lines)),
                None => rules::find_total_energy(&content.lines),
            };

            match attempt {
                Ok(value) => return Some(value),
                Err(failure) => {
                    warn!("page {}: automatic energy extraction failed: {}", page, failure);
                    self.transition_to_manual();
                }
            }
        }

        warn!("page {}: requesting manual total energy value", page);
        self.prompt.request_number(page, Field::TotalEnergy)
    }

    /// One-directional mode transition; logged exactly once per run.
    fn transition_to_manual(&mut self) {
        if self.mode != ExtractionMode::Manual {
            self.mode = ExtractionMode::Manual;
            self.transitioned = true;
            warn!("switching to manual extraction for the remainder of the run");
        }
    }
}

/// Accept an operator-supplied month only if it is itself a month name
/// or a number in 1-12.
fn normalize_month_reply(reply: &str) -> Option<String> {
    let trimmed = reply.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return rules::month::month_number_to_name(number).map(|name| name.to_string());
    }
    rules::find_month(std::slice::from_ref(&trimmed.to_string()))
}
