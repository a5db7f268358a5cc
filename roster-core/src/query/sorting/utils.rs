//! Utility functions for sorting operations

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` tells us which element from the original slice
/// should be at that position.
pub fn reorder_by_indices<T: Clone>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut temp = Vec::with_capacity(items.len());
    for &idx in indices {
        debug_assert!(idx < items.len(), "Index out of bounds");
        temp.push(items[idx].clone());
    }

    items.clone_from_slice(&temp);
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.windows(2).all(|w| {
        matches!(
            compare(&w[0], &w[1]),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal
        )
    })
}
