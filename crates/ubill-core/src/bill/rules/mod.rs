//! Heuristic field recognizers for utility-bill pages.
//!
//! Each recognizer is a pure function over a page's text lines: it
//! returns an optional value (or a typed failure for the energy
//! heuristic) and never prompts, panics, or logs on behalf of the
//! caller. Fallback policy lives in the session.

pub mod patterns;
pub mod month;
pub mod year;
pub mod name;
pub mod energy;

pub use month::find_month;
pub use year::find_year;
pub use name::find_name;
pub use energy::{find_total_energy, find_total_energy_in_table, EnergyFailure};

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value among `matches`.
///
/// Ties are broken by first encounter: among equally frequent values
/// the one that appeared earliest in the input wins. Returns `None`
/// for an empty input.
pub(crate) fn frequency_mode<T: Eq + Hash + Clone>(matches: &[T]) -> Option<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in matches {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&T, usize)> = None;
    for value in matches {
        let count = counts[value];
        match best {
            // Strictly greater keeps the earliest of the tied values.
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frequency_mode_picks_most_frequent() {
        let matches = vec!["March", "April", "March"];
        assert_eq!(frequency_mode(&matches), Some("March"));
    }

    #[test]
    fn test_frequency_mode_tie_breaks_by_first_encounter() {
        let matches = vec!["April", "March", "March", "April"];
        assert_eq!(frequency_mode(&matches), Some("April"));
    }

    #[test]
    fn test_frequency_mode_empty() {
        let matches: Vec<String> = Vec::new();
        assert_eq!(frequency_mode(&matches), None);
    }
}
