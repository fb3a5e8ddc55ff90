//! Fixed-capacity double-ended queue
//!
//! Backs the sliding window of recent samples. Storage is allocated once at
//! construction and indexed by wrapping head/tail offsets, so no operation
//! allocates after that.

use crate::traits::Sketch;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

const ERROR_EMPTY: &str = "queue is empty";
const ERROR_FULL: &str = "queue is full";

/// Bounded FIFO over a circular array
///
/// Pushes and pops are O(1) at both ends. The window never evicts on its own:
/// pushing onto a full window or popping from an empty one is a caller bug
/// and panics.
///
/// # Example
///
/// ```
/// use framestats::window::SlidingWindow;
///
/// let mut window = SlidingWindow::new(3);
/// window.push_back(1);
/// window.push_back(2);
/// window.push_back(3);
/// assert!(window.is_full());
///
/// // Make room before pushing again
/// assert_eq!(window.pop_front(), 1);
/// window.push_back(4);
///
/// assert_eq!(window.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct SlidingWindow<T> {
    /// Backing storage, length == capacity
    values: Vec<T>,
    /// Index of the front element
    head: usize,
    /// Index one past the back element
    tail: usize,
    /// Number of live elements
    count: usize,
}

impl<T: Copy + Default> SlidingWindow<T> {
    /// Create an empty window holding at most `capacity` values
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            values: vec![T::default(); capacity],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Maximum number of values
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no values are live
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the window is at capacity
    pub fn is_full(&self) -> bool {
        self.count == self.values.len()
    }

    /// Insert at the front, O(1)
    ///
    /// # Panics
    ///
    /// Panics if the window is full.
    pub fn push_front(&mut self, value: T) {
        self.assert_not_full();
        self.head = self.previous(self.head);
        self.values[self.head] = value;
        self.count += 1;
    }

    /// Insert at the back, O(1)
    ///
    /// # Panics
    ///
    /// Panics if the window is full.
    pub fn push_back(&mut self, value: T) {
        self.assert_not_full();
        self.values[self.tail] = value;
        self.tail = self.next(self.tail);
        self.count += 1;
    }

    /// Remove and return the front (oldest) value, O(1)
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn pop_front(&mut self) -> T {
        self.assert_not_empty();
        let value = self.values[self.head];
        self.head = self.next(self.head);
        self.count -= 1;
        value
    }

    /// Remove and return the back (newest) value, O(1)
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn pop_back(&mut self) -> T {
        self.assert_not_empty();
        self.tail = self.previous(self.tail);
        self.count -= 1;
        self.values[self.tail]
    }

    /// Front value without removing it
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn peek_front(&self) -> T {
        self.assert_not_empty();
        self.values[self.head]
    }

    /// Back value without removing it
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn peek_back(&self) -> T {
        self.assert_not_empty();
        self.values[self.previous(self.tail)]
    }

    /// Forget every value, O(1)
    ///
    /// Storage is left as is; stale slots are overwritten by later pushes.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Iterate live values from front (oldest) to back (newest)
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.count).map(move |offset| {
            let index = (self.head + offset) % self.values.len();
            self.values[index]
        })
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        if index + 1 < self.values.len() {
            index + 1
        } else {
            0
        }
    }

    #[inline]
    fn previous(&self, index: usize) -> usize {
        if index > 0 {
            index - 1
        } else {
            self.values.len() - 1
        }
    }

    #[inline]
    fn assert_not_empty(&self) {
        assert!(self.count > 0, "{}", ERROR_EMPTY);
    }

    #[inline]
    fn assert_not_full(&self) {
        assert!(self.count < self.values.len(), "{}", ERROR_FULL);
    }
}

impl<T: Copy + Default + core::fmt::Debug> Sketch for SlidingWindow<T> {
    type Item = T;

    /// Push at the back, evicting the front first when full
    fn update(&mut self, item: &Self::Item) {
        if self.is_full() {
            self.pop_front();
        }
        self.push_back(*item);
    }

    fn clear(&mut self) {
        SlidingWindow::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.values.len() * core::mem::size_of::<T>()
    }

    fn count(&self) -> u64 {
        self.count as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut window = SlidingWindow::new(4);
        window.push_back(10);
        window.push_back(20);
        window.push_back(30);

        assert_eq!(window.pop_front(), 10);
        assert_eq!(window.pop_front(), 20);
        assert_eq!(window.pop_front(), 30);
        assert!(window.is_empty());
    }

    #[test]
    fn test_lifo_from_back() {
        let mut window = SlidingWindow::new(4);
        window.push_back(1);
        window.push_back(2);
        window.push_back(3);

        assert_eq!(window.pop_back(), 3);
        assert_eq!(window.pop_back(), 2);
        assert_eq!(window.pop_back(), 1);
    }

    #[test]
    fn test_push_front() {
        let mut window = SlidingWindow::new(3);
        window.push_front(1);
        window.push_front(2);
        window.push_back(3);

        assert_eq!(window.peek_front(), 2);
        assert_eq!(window.peek_back(), 3);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_wraparound() {
        let mut window = SlidingWindow::new(3);
        for round in 0..10 {
            if window.is_full() {
                window.pop_front();
            }
            window.push_back(round);
        }

        assert_eq!(window.len(), 3);
        assert_eq!(window.peek_front(), 7);
        assert_eq!(window.peek_back(), 9);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn test_count_and_full() {
        let mut window = SlidingWindow::new(5);
        for i in 0..5 {
            assert!(!window.is_full());
            window.push_back(i);
            assert_eq!(window.len(), i as usize + 1);
        }
        assert!(window.is_full());
        assert_eq!(window.capacity(), 5);
    }

    #[test]
    fn test_single_slot() {
        let mut window = SlidingWindow::new(1);
        window.push_back(7);
        assert!(window.is_full());
        assert_eq!(window.peek_front(), window.peek_back());
        assert_eq!(window.pop_back(), 7);
        window.push_front(8);
        assert_eq!(window.pop_front(), 8);
    }

    #[test]
    fn test_clear() {
        let mut window = SlidingWindow::new(3);
        window.push_back(1);
        window.push_back(2);

        window.clear();

        assert!(window.is_empty());
        assert_eq!(window.iter().count(), 0);

        window.push_back(5);
        assert_eq!(window.peek_front(), 5);
    }

    #[test]
    fn test_sketch_update_evicts() {
        let mut window = SlidingWindow::new(2);
        for v in [1, 2, 3] {
            window.update(&v);
        }
        assert_eq!(Sketch::count(&window), 2);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    #[should_panic(expected = "queue is full")]
    fn test_push_back_when_full() {
        let mut window = SlidingWindow::new(2);
        window.push_back(1);
        window.push_back(2);
        window.push_back(3);
    }

    #[test]
    #[should_panic(expected = "queue is full")]
    fn test_push_front_when_full() {
        let mut window = SlidingWindow::new(1);
        window.push_front(1);
        window.push_front(2);
    }

    #[test]
    #[should_panic(expected = "queue is empty")]
    fn test_pop_front_when_empty() {
        let mut window: SlidingWindow<i32> = SlidingWindow::new(2);
        window.pop_front();
    }

    #[test]
    #[should_panic(expected = "queue is empty")]
    fn test_pop_back_when_empty() {
        let mut window: SlidingWindow<i32> = SlidingWindow::new(2);
        window.push_back(1);
        window.pop_back();
        window.pop_back();
    }

    #[test]
    #[should_panic(expected = "queue is empty")]
    fn test_peek_when_empty() {
        let window: SlidingWindow<i32> = SlidingWindow::new(2);
        window.peek_back();
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity() {
        let _ = SlidingWindow::<i32>::new(0);
    }
}
