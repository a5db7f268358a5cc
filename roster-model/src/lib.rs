//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod client;
pub mod error;
pub mod prelude;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use client::{Client, ClientId, ClientKind, ClientStatus};
pub use error::{ModelError, Result as ModelResult};
pub use sort::{
    ActiveSortList, FieldPriorityOrder, SortCriterion, SortDirection,
    SortField, ToggleOutcome, move_item,
};
