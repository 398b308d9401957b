//! Utility-bill field extraction module.

pub mod prompt;
pub mod rules;
mod session;

pub use session::{Session, ExtractionMode};

use serde::{Deserialize, Serialize};

/// The fields a recognizer can resolve on a page.
///
/// Used to scope diagnostics and manual-entry prompts to a
/// `(page, field)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Reporting month.
    Month,
    /// Reporting year.
    Year,
    /// Facility/operator/account name.
    Name,
    /// Total energy usage.
    TotalEnergy,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Month => "month",
            Field::Year => "year",
            Field::Name => "name",
            Field::TotalEnergy => "total energy",
        };
        f.write_str(name)
    }
}
