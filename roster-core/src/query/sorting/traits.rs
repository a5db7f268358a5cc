//! Core traits for sortable entities
//!
//! Anything the sort engine orders must expose its sortable attributes as
//! typed [`SortValue`]s, one per [`SortField`].

use roster_model::SortField;

use super::keys::SortValue;

/// Base trait for any sortable record
pub trait SortableEntity {
    /// Extract the value compared for `field`
    fn sort_value(&self, field: SortField) -> SortValue<'_>;
}

impl<T: SortableEntity + ?Sized> SortableEntity for &T {
    fn sort_value(&self, field: SortField) -> SortValue<'_> {
        (**self).sort_value(field)
    }
}
