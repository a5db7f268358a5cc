//! Sort-priority engine
//!
//! Owns the active criteria and the field priority order, persists both
//! after every mutation and derives the record comparator from them.

use std::cmp::Ordering;

use roster_model::{ActiveSortList, FieldPriorityOrder, SortDirection, SortField};
use tracing::debug;

use crate::persistence::{KeyValueStore, SortStatePersistence};
use crate::query::sorting::utils::is_sorted_by;
use crate::query::sorting::{PrioritizedSort, SortCost, SortStrategy, SortableEntity};

/// What an engine operation changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortChange {
    /// Nothing changed and nothing was persisted
    Unchanged,
    /// The active criteria changed
    Criteria,
    /// The field priority order changed; `resort` is set when criteria are
    /// active and the ordering is affected
    Priority { resort: bool },
    /// Only the display order of the active criteria changed
    Display,
}

impl SortChange {
    /// Whether the ordered output must be recomputed
    pub fn requires_resort(&self) -> bool {
        match self {
            SortChange::Criteria => true,
            SortChange::Priority { resort } => *resort,
            SortChange::Unchanged | SortChange::Display => false,
        }
    }
}

#[derive(Debug)]
pub struct SortPriorityEngine<S> {
    active_sorts: ActiveSortList,
    field_order: FieldPriorityOrder,
    persistence: SortStatePersistence<S>,
}

impl<S: KeyValueStore> SortPriorityEngine<S> {
    /// Engine over `store` with the default slot keys and priority order
    pub fn new(store: S) -> Self {
        Self::load(SortStatePersistence::new(store), &FieldPriorityOrder::default())
    }

    /// Restore both slots; unusable saved state falls back to an empty
    /// criteria list and `default_order`
    pub fn load(
        mut persistence: SortStatePersistence<S>,
        default_order: &FieldPriorityOrder,
    ) -> Self {
        let active_sorts = persistence.load_active_sorts();
        let field_order = persistence.load_field_order(default_order);
        debug!(
            active = active_sorts.len(),
            order = ?field_order.as_slice(),
            "sort engine loaded"
        );
        Self {
            active_sorts,
            field_order,
            persistence,
        }
    }

    pub fn active_sorts(&self) -> &ActiveSortList {
        &self.active_sorts
    }

    pub fn field_order(&self) -> &FieldPriorityOrder {
        &self.field_order
    }

    pub fn persistence(&self) -> &SortStatePersistence<S> {
        &self.persistence
    }

    pub fn into_persistence(self) -> SortStatePersistence<S> {
        self.persistence
    }

    pub fn is_active(&self, field: SortField, direction: SortDirection) -> bool {
        self.active_sorts.contains(field, direction)
    }

    /// Add, remove or flip the criterion for `field`
    pub fn toggle_criterion(&mut self, field: SortField, direction: SortDirection) -> SortChange {
        let mut next = self.active_sorts.clone();
        let outcome = next.toggle(field, direction);
        debug!(%field, %direction, ?outcome, "toggled sort criterion");
        self.replace_active(next);
        SortChange::Criteria
    }

    /// Drop the criterion for `field` in either direction
    pub fn remove_criterion(&mut self, field: SortField) -> SortChange {
        let mut next = self.active_sorts.clone();
        if !next.remove_field(field) {
            return SortChange::Unchanged;
        }
        debug!(%field, "removed sort criterion");
        self.replace_active(next);
        SortChange::Criteria
    }

    pub fn clear_all_criteria(&mut self) -> SortChange {
        debug!(cleared = self.active_sorts.len(), "cleared sort criteria");
        self.replace_active(ActiveSortList::new());
        SortChange::Criteria
    }

    /// Move `field` to `new_index` in the priority order; the index is
    /// clamped to the last position
    pub fn reorder_field_priority(&mut self, field: SortField, new_index: usize) -> SortChange {
        let mut next = self.field_order.clone();
        if !next.move_field(field, new_index) {
            return SortChange::Unchanged;
        }
        debug!(%field, new_index, order = ?next.as_slice(), "reordered field priority");
        self.field_order = next;
        self.persistence.save_field_order(&self.field_order);
        SortChange::Priority {
            resort: !self.active_sorts.is_empty(),
        }
    }

    /// Move `field` so it sits directly ahead of `target`
    pub fn move_field_before(&mut self, field: SortField, target: SortField) -> SortChange {
        if field == target {
            return SortChange::Unchanged;
        }
        let from = self.field_order.position(field);
        let to = self.field_order.position(target);
        let to = if from < to { to - 1 } else { to };
        self.reorder_field_priority(field, to)
    }

    /// Reorder the active list itself. Precedence still comes from the
    /// field priority order, so the output is unaffected.
    pub fn reorder_active_criteria(&mut self, key: &str, new_index: usize) -> SortChange {
        let mut next = self.active_sorts.clone();
        if !next.move_criterion(key, new_index) {
            debug!(key, new_index, "ignored criterion move");
            return SortChange::Unchanged;
        }
        self.replace_active(next);
        SortChange::Display
    }

    /// Comparator for the current state
    pub fn strategy(&self) -> PrioritizedSort {
        PrioritizedSort::new(&self.active_sorts, &self.field_order)
    }

    pub fn compare_records<T: SortableEntity + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.strategy().compare(a, b)
    }

    /// Stably sorted copy of `records`; input order when no criteria are
    /// active
    pub fn apply<T: SortableEntity + Clone>(&self, records: &[T]) -> Vec<T> {
        let mut ordered = records.to_vec();
        let strategy = self.strategy();
        let cost = SortStrategy::<T>::cost_estimate(&strategy);
        if cost == SortCost::Trivial || ordered.len() < 2 {
            return ordered;
        }
        debug!(?cost, records = ordered.len(), "sorting records");
        strategy.sort(ordered.as_mut_slice());
        debug_assert!(is_sorted_by(&ordered, |a, b| strategy.compare(a, b)));
        ordered
    }

    fn replace_active(&mut self, next: ActiveSortList) {
        self.active_sorts = next;
        self.persistence.save_active_sorts(&self.active_sorts);
    }
}
