//! Page record data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Extracted data for one processed page.
///
/// Exactly one record exists per page, even when every field failed to
/// resolve; page-to-row correspondence in the export is never dropped.
/// Records are immutable after assembly: an operator-supplied value is
/// folded in at assembly time, never patched in later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed, strictly increasing in traversal order).
    pub page_number: u32,

    /// Reporting month as a capitalized English month name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    /// Reporting year (2000-2099).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Facility/operator/account label. Always populated; falls back
    /// to an operator-supplied value or the configured sentinel.
    pub name: String,

    /// Total energy usage. Absent only when both the heuristics and
    /// the manual-entry fallback came up empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_energy: Option<Decimal>,
}
