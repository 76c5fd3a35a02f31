//! Operations over the plain sequence view -- a `Vec<T>`, which may hold duplicates.

use crate::operations::SearchOutcome;


/// Scans `values` for the first element equal to `target` -- correct regardless of the order of `values`
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> SearchOutcome {
    if values.is_empty() {
        return SearchOutcome::Empty
    }
    values.iter()
        .position(|value| value == target)
        .map_or(SearchOutcome::NotFound, |position| SearchOutcome::Found { position: Some(position) })
}

/// Binary search for `target` -- `sorted` must be in ascending order (see [sort()]), otherwise the outcome is meaningless.\
/// With duplicates, any of the matching positions may be reported.
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> SearchOutcome {
    if sorted.is_empty() {
        return SearchOutcome::Empty
    }
    match sorted.binary_search(target) {
        Ok(position) => SearchOutcome::Found { position: Some(position) },
        Err(_)       => SearchOutcome::NotFound,
    }
}

/// Smallest & largest elements -- `None` for an empty sequence
pub fn min_max<T: Ord>(values: &[T]) -> Option<(&T, &T)> {
    super::min_max(values)
}

/// Returns a new, ascending sorted, sequence -- stable: equal elements keep their relative order.
/// `values` is left untouched.
pub fn sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// appends `value` to the end of the sequence
pub fn insert<T>(values: &mut Vec<T>, value: T) {
    values.push(value);
}

/// Inserts `value` into the ascending `sorted` sequence, keeping it sorted -- after any equal elements.
/// Returns the position it was placed at.
pub fn insert_sorted<T: Ord>(sorted: &mut Vec<T>, value: T) -> usize {
    let position = sorted.partition_point(|element| element <= &value);
    sorted.insert(position, value);
    position
}

/// Removes the first element equal to `target` -- at most one -- returning it
pub fn delete_one<T: PartialEq>(values: &mut Vec<T>, target: &T) -> Option<T> {
    let position = values.iter().position(|value| value == target)?;
    Some(values.remove(position))
}

/// Removes every element equal to `target`, returning how many were removed
pub fn delete_by_value<T: PartialEq>(values: &mut Vec<T>, target: &T) -> usize {
    let original_len = values.len();
    values.retain(|value| value != target);
    original_len - values.len()
}
