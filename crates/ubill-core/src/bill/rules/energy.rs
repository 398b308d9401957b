//! Total-energy recognizer (automatic mode).
//!
//! Positional heuristic over layout-preserving text: the last header
//! line and the last candidate data line are assumed to share the same
//! column layout, so a keyword's character offset in the header is
//! used to window into the data line. This alignment is a documented
//! limitation: it breaks under variable whitespace and is deliberately
//! not generalized into column-aware parsing.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use super::patterns::{HEADER_KEYWORDS, TOTAL_MARKER};

/// Window start is pulled back this many characters before the header
/// keyword's offset.
const WINDOW_BACKSHIFT: usize = 2;

/// Structural failures of the automatic energy heuristic.
///
/// Any of these sends the session into manual mode for the rest of
/// the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnergyFailure {
    /// No line contained a table header keyword.
    #[error("no header keyword found")]
    NoHeader,

    /// No candidate data line (leading digit or "Total" marker).
    #[error("no candidate data line found")]
    NoData,

    /// The windowed extraction yielded no token.
    #[error("no value token at the header column")]
    NoToken,

    /// The extracted token was not numeric.
    #[error("value token is not numeric: {0}")]
    Malformed(String),
}

/// Extract the total energy usage from a page's text lines.
///
/// Candidate data lines start with a digit or contain `Total`;
/// candidate header lines contain one of the fixed header keywords.
/// The last header line is authoritative: the first keyword found in
/// it (keyword-list priority order, not line order) fixes the column
/// offset, and the first whitespace-delimited token in the last data
/// line from two characters before that offset is the result.
pub fn find_total_energy(lines: &[String]) -> Result<Decimal, EnergyFailure> {
    let mut data_lines: Vec<&str> = Vec::new();
    let mut header_lines: Vec<&str> = Vec::new();

    for line in lines {
        let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
        if starts_with_digit || TOTAL_MARKER.is_match(line) {
            data_lines.push(line);
        }
        if contains_header_keyword(line) {
            header_lines.push(line);
        }
    }

    // "Closest wins": the relevant header and totals row are assumed
    // to appear latest on the page.
    let header = header_lines.last().ok_or(EnergyFailure::NoHeader)?;
    let data = data_lines.last().ok_or(EnergyFailure::NoData)?;

    let offset = keyword_offset(header).ok_or(EnergyFailure::NoHeader)?;
    debug!("header keyword at offset {} in {:?}", offset, header);

    let token = window_token(data, offset).ok_or(EnergyFailure::NoToken)?;
    parse_energy_token(token)
}

/// Extract the total energy usage from a decoded table of cells.
///
/// Variant for sources that deliver a cell grid: the keyword column is
/// located in the first row and the value read from that column of the
/// last row.
pub fn find_total_energy_in_table(table: &[Vec<String>]) -> Result<Decimal, EnergyFailure> {
    let header_row = table.first().ok_or(EnergyFailure::NoData)?;

    let column = HEADER_KEYWORDS
        .iter()
        .find_map(|keyword| {
            header_row
                .iter()
                .position(|cell| find_ascii_ci(cell, keyword).is_some())
        })
        .ok_or(EnergyFailure::NoHeader)?;

    let totals_row = table.last().filter(|row| !row.is_empty()).ok_or(EnergyFailure::NoData)?;
    let cell = totals_row.get(column).ok_or(EnergyFailure::NoToken)?;

    let token = cell.split_whitespace().next().ok_or(EnergyFailure::NoToken)?;
    parse_energy_token(token)
}

fn contains_header_keyword(line: &str) -> bool {
    HEADER_KEYWORDS
        .iter()
        .any(|keyword| find_ascii_ci(line, keyword).is_some())
}

/// Offset of the highest-priority keyword present in a header line.
fn keyword_offset(header: &str) -> Option<usize> {
    HEADER_KEYWORDS
        .iter()
        .find_map(|keyword| find_ascii_ci(header, keyword))
}

/// First whitespace-delimited token starting at `offset - 2`, snapped
/// to a char boundary so multi-byte text cannot split mid-character.
fn window_token(data: &str, offset: usize) -> Option<&str> {
    let mut start = offset.saturating_sub(WINDOW_BACKSHIFT).min(data.len());
    while !data.is_char_boundary(start) {
        start -= 1;
    }
    data[start..].split_whitespace().next()
}

/// Parse a numeric token, tolerating thousands separators.
fn parse_energy_token(token: &str) -> Result<Decimal, EnergyFailure> {
    let cleaned = token.replace(',', "");
    Decimal::from_str(&cleaned).map_err(|_| EnergyFailure::Malformed(token.to_string()))
}

/// Case-insensitive ASCII substring search, returning the byte offset.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}
