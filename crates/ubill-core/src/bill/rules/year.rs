//! Year recognizer.

use super::frequency_mode;
use super::patterns::YEAR;

/// Recognize the reporting year from a page's text lines.
///
/// Same multiset/mode strategy as the month recognizer, restricted to
/// four-digit tokens in 2000-2099.
pub fn find_year(lines: &[String]) -> Option<i32> {
    let mut matches = Vec::new();

    for line in lines {
        for m in YEAR.find_iter(line) {
            if let Ok(year) = m.as_str().parse::<i32>() {
                matches.push(year);
            }
        }
    }

    frequency_mode(&matches)
}
