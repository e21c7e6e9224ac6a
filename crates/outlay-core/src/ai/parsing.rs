//! Parsing helpers for AI backend responses
//!
//! Models return free text; these functions turn it into validated values.
//! They are pure so the validation contracts can be unit-tested without any
//! network dependency.

use std::str::FromStr;

use crate::models::Category;

/// Parse a category name from a classifier response
///
/// The trimmed response must exactly match one of the fixed category names
/// (case-sensitive). Anything else - prose, a near-miss, an empty string -
/// is rejected.
pub fn parse_category(response: &str) -> Option<Category> {
    Category::from_str(response.trim()).ok()
}

/// Parse numbered insight points from an insight response
///
/// A line qualifies as a point if it starts with a digit immediately
/// followed by a period (e.g. "1."); the point text is everything after
/// that prefix, trimmed. Blank results after trimming are discarded, as are
/// lines without the prefix.
pub fn parse_insight_points(response: &str) -> Vec<String> {
    let mut points = Vec::new();

    for line in response.lines() {
        let line = line.trim();
        let mut chars = line.chars();
        let qualifies = matches!(
            (chars.next(), chars.next()),
            (Some(first), Some('.')) if first.is_ascii_digit()
        );
        if !qualifies {
            continue;
        }

        let point = line[2..].trim();
        if !point.is_empty() {
            points.push(point.to_string());
        }
    }

    points
}
