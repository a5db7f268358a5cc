//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module instead of individual modules when
//! working in rosterctl or other presentation layers.

pub use super::client::{Client, ClientId, ClientKind, ClientStatus};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::sort::{
    ActiveSortList, FieldPriorityOrder, SortCriterion, SortDirection,
    SortField, ToggleOutcome,
};
