//! Operations over the priority-ordered view: a binary min-heap.\
//! The only ordering guarantee is that the root -- see [MinPriorityQueue::peek()] -- is the smallest element.

use std::{
    cmp::Reverse,
    collections::BinaryHeap,
};
use crate::operations::SearchOutcome;


/// Min-heap over the natural order of `T` -- duplicates allowed
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new() }
    }
}

impl<T: Ord + Clone> MinPriorityQueue<T> {

    /// builds the heap out of a copy of `values`, in `O(n)`
    pub fn from_values(values: &[T]) -> Self {
        Self { heap: values.iter().cloned().map(Reverse).collect() }
    }
}

impl<T: Ord> MinPriorityQueue<T> {

    /// the smallest element, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(root)| root)
    }

    /// removes & returns the smallest element
    pub fn poll(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(root)| root)
    }

    pub fn push(&mut self, value: T) {
        self.heap.push(Reverse(value));
    }

    /// Linear scan -- the heap layout gives no position worth reporting
    pub fn search(&self, target: &T) -> SearchOutcome {
        if self.heap.is_empty() {
            return SearchOutcome::Empty
        }
        if self.heap.iter().any(|Reverse(element)| element == target) {
            SearchOutcome::Found { position: None }
        } else {
            SearchOutcome::NotFound
        }
    }

    /// Linear scan over every element: only the minimum is at a known place in the heap
    pub fn min_max(&self) -> Option<(&T, &T)> {
        super::min_max(self.heap.iter().map(|Reverse(element)| element))
    }

    /// Removes every element equal to `target`, returning how many were removed
    pub fn delete_by_value(&mut self, target: &T) -> usize {
        let original_len = self.heap.len();
        self.heap.retain(|Reverse(element)| element != target);
        original_len - self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [priority](super) module

    use super::*;

    #[test]
    fn root_is_the_minimum() {
        let mut queue = MinPriorityQueue::from_values(&[5, 3, 8, 1, 9, 1]);
        assert_eq!(queue.peek(), Some(&1));
        let drained: Vec<i32> = std::iter::from_fn(|| queue.poll()).collect();
        assert_eq!(drained, vec![1, 1, 3, 5, 8, 9]);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn peek_then_poll() {
        let mut queue = MinPriorityQueue::from_values(&[420, -7, 33]);
        assert_eq!(queue.peek(), Some(&-7));
        assert_eq!(queue.poll(), Some(-7));
        assert_eq!(queue.peek(), Some(&33), "the next smallest should become the new root");
        queue.push(-100);
        assert_eq!(queue.peek(), Some(&-100));
    }

    #[test]
    fn searches_and_scans() {
        let queue = MinPriorityQueue::from_values(&[5, 3, 8]);
        assert_eq!(queue.search(&8), SearchOutcome::Found { position: None });
        assert_eq!(queue.search(&4), SearchOutcome::NotFound);
        assert_eq!(queue.min_max(), Some((&3, &8)));
        let empty = MinPriorityQueue::<i32>::default();
        assert_eq!(empty.search(&4), SearchOutcome::Empty);
        assert_eq!(empty.min_max(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn delete_by_value_keeps_the_heap_valid() {
        let mut queue = MinPriorityQueue::from_values(&[2, 1, 2, 3, 1]);
        assert_eq!(queue.delete_by_value(&1), 2);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&2));
        assert_eq!(queue.delete_by_value(&7), 0);
    }
}
