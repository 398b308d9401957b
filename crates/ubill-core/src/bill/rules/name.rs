//! Facility name recognizer.

use super::patterns::NAME_LABEL;

/// Recognize the facility/operator/account name from a page's lines.
///
/// The first line containing a `Name:` / `Operator:` / `Facility`
/// label wins (no frequency vote, unlike month/year), even when its
/// value is empty; the value is everything after the last colon on
/// that line, trimmed. Returns `None` when no line matches; resolving
/// an empty or missing value is the session's concern.
pub fn find_name(lines: &[String]) -> Option<String> {
    for line in lines {
        if !NAME_LABEL.is_match(line) {
            continue;
        }

        let value = match line.rfind(':') {
            Some(idx) => line[idx + 1..].trim(),
            // "Facility" lines may carry no colon at all.
            None => line.trim(),
        };

        return Some(value.to_string());
    }

    None
}
