//! Sort values extracted from records and the rules for comparing them
//!
//! A comparison walks three tiers: timestamps compare by instant, text
//! compares with locale-aware collation, and any other pairing falls back
//! to a plain less-than check.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::collation::compare_text;

/// Typed value of a single sortable attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum SortValue<'a> {
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

/// Compare two values in ascending order
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a, b) {
        (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        _ => {
            if a < b {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}
