//! Operations over the ordered set view -- a `BTreeSet<T>`: no duplicates, ascending iteration.

use std::collections::BTreeSet;
use crate::operations::SearchOutcome;


/// builds the set out of a copy of `values` -- duplicates collapse into one element
pub fn from_values<T: Ord + Clone>(values: &[T]) -> BTreeSet<T> {
    values.iter().cloned().collect()
}

pub fn search<T: Ord>(set: &BTreeSet<T>, target: &T) -> SearchOutcome {
    if set.is_empty() {
        SearchOutcome::Empty
    } else if set.contains(target) {
        SearchOutcome::Found { position: None }
    } else {
        SearchOutcome::NotFound
    }
}

/// Linear scan, like for every other container -- `None` for an empty set
pub fn min_max<T: Ord>(set: &BTreeSet<T>) -> Option<(&T, &T)> {
    super::min_max(set)
}

/// Adds `value`, returning `false` -- and leaving the set untouched -- if it was already there
pub fn insert<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    set.insert(value)
}

/// Removes `target`, returning whether it was present
pub fn delete<T: Ord>(set: &mut BTreeSet<T>, target: &T) -> bool {
    set.remove(target)
}

/// the elements, in ascending order
pub fn sorted<T: Ord + Clone>(set: &BTreeSet<T>) -> Vec<T> {
    set.iter().cloned().collect()
}

/// Tells whether every element of `values` is present in `set`
pub fn contains_all<T: Ord>(set: &BTreeSet<T>, values: &[T]) -> bool {
    values.iter().all(|value| set.contains(value))
}


#[cfg(test)]
mod tests {

    //! Unit tests for [set](super) module

    use super::*;

    #[test]
    fn duplicates_collapse() {
        let values = [4, 1, 4, 3, 1];
        let set = from_values(&values);
        assert_eq!(set.len(), 3);
        assert_eq!(sorted(&set), vec![1, 3, 4]);
        assert!(contains_all(&set, &values));
        assert!(!contains_all(&set, &[1, 2]));
    }

    #[test]
    fn inserting_an_existing_element_is_a_no_op() {
        let mut set = from_values(&[1, 2, 3]);
        assert!(!insert(&mut set, 2));
        assert_eq!(set.len(), 3);
        assert!(insert(&mut set, 0));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn searches_scans_and_deletes() {
        let mut set = from_values(&[10, 30, 20]);
        assert_eq!(search(&set, &20), SearchOutcome::Found { position: None });
        assert_eq!(search(&set, &25), SearchOutcome::NotFound);
        assert_eq!(min_max(&set), Some((&10, &30)));
        assert!(delete(&mut set, &20));
        assert!(!delete(&mut set, &20));
        let empty = BTreeSet::<i32>::new();
        assert_eq!(search(&empty, &1), SearchOutcome::Empty);
        assert_eq!(min_max(&empty), None);
    }
}
