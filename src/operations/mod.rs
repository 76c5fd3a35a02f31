//! Pure operations over the four container views of a value sequence:
//!   - [sequence] -- plain `Vec`, possibly with duplicates;
//!   - [priority] -- a binary min-heap, whose root is always the smallest element;
//!   - [set] -- an ordered set, without duplicates;
//!   - [map] -- an associative map from [crate::OrderedKey] to a payload, without duplicate keys.
//!
//! Empty containers are never errors: searches report [SearchOutcome::Empty] and min/max scans return `None`.

pub mod sequence;
pub mod priority;
pub mod set;
pub mod map;


/// What a search found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// the container had no elements at all
    Empty,
    NotFound,
    /// `position` is only known for containers with positional access
    Found { position: Option<usize> },
}

impl SearchOutcome {

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Found { position } => *position,
            _ => None,
        }
    }
}

/// Linear `O(n)` scan for the smallest & largest elements, in a single pass.\
/// Ties keep the first occurrence. Returns `None` for an empty input.
pub fn min_max<'a, T: Ord + 'a>(elements: impl IntoIterator<Item=&'a T>) -> Option<(&'a T, &'a T)> {
    let mut elements = elements.into_iter();
    let first = elements.next()?;
    Some(elements.fold((first, first), |(min, max), element| {
        (if element < min { element } else { min },
         if element > max { element } else { max })
    }))
}


#[cfg(test)]
mod tests {

    //! Unit tests for [operations](super) module

    use super::*;

    #[test]
    fn min_max_scan() {
        assert_eq!(min_max(&[3, 1, 4, 1, 5, 9, 2, 6]), Some((&1, &9)));
        assert_eq!(min_max(&[7]),                     Some((&7, &7)));
        assert_eq!(min_max(&Vec::<i32>::new()),       None);
        // the maximum keeps being tracked after the minimum stops moving
        assert_eq!(min_max(&[5, 1, 2, 3, 4]),         Some((&1, &5)));
        assert_eq!(min_max(&[1, 2, 3, 4, 5]),         Some((&1, &5)));
    }

    #[test]
    fn outcomes() {
        assert!(SearchOutcome::Found { position: None }.is_found());
        assert_eq!(SearchOutcome::Found { position: Some(3) }.position(), Some(3));
        assert!(!SearchOutcome::NotFound.is_found());
        assert_eq!(SearchOutcome::Empty.position(), None);
    }
}
