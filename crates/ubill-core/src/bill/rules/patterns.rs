//! Common regex patterns for utility-bill extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Literal English month names
    pub static ref MONTH_NAME: Regex = Regex::new(
        r"(?i)(January|February|March|April|May|June|July|August|September|October|November|December)"
    ).unwrap();

    // Numeric date token: D[/-]D[/-]YYYY, leading group read as a month number
    pub static ref NUMERIC_DATE: Regex = Regex::new(
        r"\b(\d{1,2})[/-]\d{1,2}[/-]\d{4}\b"
    ).unwrap();

    // Four-digit years 2000-2099
    pub static ref YEAR: Regex = Regex::new(
        r"\b20\d{2}\b"
    ).unwrap();

    // Facility/operator/account label lines
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)(Name:|Operator:|Facility)"
    ).unwrap();

    // Totals row marker
    pub static ref TOTAL_MARKER: Regex = Regex::new(
        r"(?i)Total"
    ).unwrap();
}

/// Table header keywords, in priority order.
///
/// The order matters: when locating the value column inside a header
/// line, the list is scanned in this order, not in line order.
pub const HEADER_KEYWORDS: [&str; 6] = [
    "Energy",
    "Usage",
    "MMBtu",
    "Quantity",
    "Current",
    "Rounded",
];
