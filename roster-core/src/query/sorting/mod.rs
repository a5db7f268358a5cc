//! Sorting module for client-side multi-criterion ordering
//!
//! This module provides:
//! - The trait for sortable records and the per-field accessor table
//! - Typed sort values with locale-aware text collation
//! - The prioritized strategy combining active criteria with field priority
//! - The sort option catalogue shown by presentation layers

pub mod collation;
pub mod fields;
pub mod keys;
pub mod options;
pub mod strategy;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use collation::compare_text;
pub use fields::{FieldAccessor, accessor};
pub use keys::{SortValue, compare_values};
pub use options::{SortChoice, SortOption, sort_option, sort_options};
pub use strategy::{PrioritizedSort, SortCost, SortStrategy};
pub use traits::SortableEntity;
