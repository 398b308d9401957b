//! Operator prompt capability.
//!
//! The recognizers themselves are pure; when one comes up empty the
//! session asks a [`ValuePrompt`] for a replacement value scoped to a
//! `(page, field)` pair. Interactive frontends block on the operator;
//! non-interactive callers plug in [`NoPrompt`] (or their own defaults
//! provider) so nothing ever waits forever.

use rust_decimal::Decimal;

use super::Field;

/// Capability for requesting manually supplied field values.
pub trait ValuePrompt {
    /// Request a textual value for a field on a page.
    ///
    /// Returning `None` declines the request; the field stays absent
    /// (or falls back to its sentinel).
    fn request_text(&mut self, page: u32, field: Field) -> Option<String>;

    /// Request a numeric value for a field on a page.
    fn request_number(&mut self, page: u32, field: Field) -> Option<Decimal>;
}

impl ValuePrompt for Box<dyn ValuePrompt> {
    fn request_text(&mut self, page: u32, field: Field) -> Option<String> {
        (**self).request_text(page, field)
    }

    fn request_number(&mut self, page: u32, field: Field) -> Option<Decimal> {
        (**self).request_number(page, field)
    }
}

/// Prompt that declines every request.
///
/// The substitute for interactive input in non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl ValuePrompt for NoPrompt {
    fn request_text(&mut self, _page: u32, _field: Field) -> Option<String> {
        None
    }

    fn request_number(&mut self, _page: u32, _field: Field) -> Option<Decimal> {
        None
    }
}
