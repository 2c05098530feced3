//! Expected-return range extraction from free-form text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Matches decimal numbers, with an optional fractional part.
    static ref NUMBER_REGEX: Regex = Regex::new(r"\d+(\.\d+)?").expect("Invalid regex pattern");
}

/// Numeric `[low, high]` percentage interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRange {
    pub low: f64,
    pub high: f64,
}

/// Extracts a `[low, high]` interval from text like "10% – 12%" or "12%".
///
/// Only the first two numbers count; later matches are ignored, not
/// averaged, which keeps the parse deterministic on malformed input. A
/// single number collapses the interval; no numbers at all is `None`.
pub fn parse_return_range(text: &str) -> Option<ReturnRange> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut numbers = NUMBER_REGEX
        .find_iter(&stripped)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite());

    let first = numbers.next()?;
    match numbers.next() {
        Some(second) => Some(ReturnRange {
            low: first.min(second),
            high: first.max(second),
        }),
        None => Some(ReturnRange {
            low: first,
            high: first,
        }),
    }
}
