//! Strategy pattern for multi-criterion sorting
//!
//! [`PrioritizedSort`] combines the active criteria with the field priority
//! order into a single stable comparator. Criteria are ranked once when
//! the strategy is built, and values are extracted once per item when a
//! slice is sorted.

use std::cmp::Ordering;

use roster_model::{ActiveSortList, FieldPriorityOrder, SortCriterion};

use super::keys::{SortValue, compare_values};
use super::traits::SortableEntity;
use super::utils::reorder_by_indices;

/// A sorting strategy that can be applied to a slice
pub trait SortStrategy<T> {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Estimate the computational cost of this sorting strategy
    fn cost_estimate(&self) -> SortCost;
}

/// Estimated cost of a sorting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - no criteria, input order is kept
    Trivial,
    /// O(n log n) - single criterion
    Moderate,
    /// O(k * n log n) - several criteria may be consulted per comparison
    Compound,
}

/// Active criteria ranked by field priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioritizedSort {
    criteria: Vec<SortCriterion>,
}

impl PrioritizedSort {
    /// Rank `active` by each field's position in `order`. The active list's
    /// own order is ignored.
    pub fn new(active: &ActiveSortList, order: &FieldPriorityOrder) -> Self {
        let ranks = order.ranks();
        let mut criteria = active.as_slice().to_vec();
        criteria.sort_by_key(|criterion| ranks[criterion.field.index()]);
        Self { criteria }
    }

    /// Criteria in the order they are consulted
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Compare two records; the first decisive criterion wins
    pub fn compare<T: SortableEntity + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        for criterion in &self.criteria {
            let ordering = compare_values(
                &a.sort_value(criterion.field),
                &b.sort_value(criterion.field),
            );
            if ordering != Ordering::Equal {
                return criterion.direction.apply(ordering);
            }
        }
        Ordering::Equal
    }

    fn compare_extracted(&self, a: &[SortValue<'_>], b: &[SortValue<'_>]) -> Ordering {
        for ((criterion, va), vb) in self.criteria.iter().zip(a).zip(b) {
            let ordering = compare_values(va, vb);
            if ordering != Ordering::Equal {
                return criterion.direction.apply(ordering);
            }
        }
        Ordering::Equal
    }
}

impl<T> SortStrategy<T> for PrioritizedSort
where
    T: SortableEntity + Clone,
{
    fn sort(&self, items: &mut [T]) {
        if self.criteria.is_empty() || items.len() < 2 {
            return;
        }

        // Extract values once for efficiency
        let mut keyed: Vec<(usize, Vec<SortValue<'_>>)> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let values = self
                    .criteria
                    .iter()
                    .map(|criterion| item.sort_value(criterion.field))
                    .collect();
                (i, values)
            })
            .collect();

        // `sort_by` is stable: ties keep their input order
        keyed.sort_by(|a, b| self.compare_extracted(&a.1, &b.1));

        let indices: Vec<usize> = keyed.into_iter().map(|(i, _)| i).collect();
        reorder_by_indices(items, &indices);
    }

    fn cost_estimate(&self) -> SortCost {
        match self.criteria.len() {
            0 => SortCost::Trivial,
            1 => SortCost::Moderate,
            _ => SortCost::Compound,
        }
    }
}
