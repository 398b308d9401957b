//! Month recognizer.

use chrono::Month;

use super::frequency_mode;
use super::patterns::{MONTH_NAME, NUMERIC_DATE};

/// Recognize the reporting month from a page's text lines.
///
/// Collects every literal month name and every `D[/-]D[/-]YYYY` date
/// token (leading group read as a month number) across all lines, then
/// picks the most frequent name; ties go to the first-encountered
/// candidate. Numeric months outside 1-12 are skipped as malformed.
pub fn find_month(lines: &[String]) -> Option<String> {
    let mut matches = Vec::new();

    for line in lines {
        for caps in MONTH_NAME.captures_iter(line) {
            matches.push(capitalize(&caps[1]));
        }

        for caps in NUMERIC_DATE.captures_iter(line) {
            let number: u32 = match caps[1].parse() {
                Ok(n) => n,
                Err(_) => continue,
            };
            if let Some(name) = month_number_to_name(number) {
                matches.push(name.to_string());
            }
        }
    }

    frequency_mode(&matches)
}

/// Map a 1-12 month number to its English name.
pub(crate) fn month_number_to_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_literal_month_most_frequent() {
        let page = lines(&[
            "Billing period: March 2024",
            "Usage for March",
            "Compare with April",
        ]);
        assert_eq!(find_month(&page), Some("March".to_string()));
    }

    #[test]
    fn test_case_insensitive_and_capitalized() {
        let page = lines(&["statement for JANUARY"]);
        assert_eq!(find_month(&page), Some("January".to_string()));
    }

    #[test]
    fn test_numeric_date_token() {
        let page = lines(&["Due date: 3/15/2024"]);
        assert_eq!(find_month(&page), Some("March".to_string()));
    }

    #[test]
    fn test_numeric_month_out_of_range_is_skipped() {
        // Month value 13 is malformed input, never a fault.
        let page = lines(&["13/05/2024"]);
        assert_eq!(find_month(&page), None);
    }

    #[test]
    fn test_multiple_matches_per_line_counted() {
        let page = lines(&["March or March", "April"]);
        assert_eq!(find_month(&page), Some("March".to_string()));
    }

    #[test]
    fn test_no_month_returns_none() {
        let page = lines(&["Total amount due: 120.00"]);
        assert_eq!(find_month(&page), None);
    }
}
