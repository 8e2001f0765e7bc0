//! Frontier containers for iterative region growing
//!
//! The iterative fill variants keep their not-yet-processed candidate
//! coordinates in one of these containers. A coordinate may be out of
//! the image's range while stored here: validity is decided only when
//! it is popped. Each container lives for exactly one fill call.

use std::collections::VecDeque;

/// A 2-D pixel coordinate: `u` is the column, `v` the row.
///
/// Pure value type; may hold coordinates outside any image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    /// Column index
    pub u: i64,
    /// Row index
    pub v: i64,
}

impl Coord {
    /// Create a coordinate pair.
    #[inline]
    pub fn new(u: i64, v: i64) -> Self {
        Self { u, v }
    }
}

/// Growable LIFO stack of coordinates.
#[derive(Debug, Default)]
pub struct CoordStack {
    items: Vec<Coord>,
}

impl CoordStack {
    /// Create a stack with room for `capacity` coordinates before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Push a coordinate on top.
    #[inline]
    pub fn push(&mut self, coord: Coord) {
        self.items.push(coord);
    }

    /// Pop the most recently pushed coordinate.
    #[inline]
    pub fn pop(&mut self) -> Option<Coord> {
        self.items.pop()
    }

    /// Number of stored coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Growable FIFO queue of coordinates.
#[derive(Debug, Default)]
pub struct CoordQueue {
    items: VecDeque<Coord>,
}

impl CoordQueue {
    /// Create a queue with room for `capacity` coordinates before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a coordinate at the back.
    #[inline]
    pub fn enqueue(&mut self, coord: Coord) {
        self.items.push_back(coord);
    }

    /// Remove and return the oldest coordinate.
    #[inline]
    pub fn dequeue(&mut self) -> Option<Coord> {
        self.items.pop_front()
    }

    /// Number of stored coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo_order() {
        let mut s = CoordStack::with_capacity(4);
        assert!(s.is_empty());
        s.push(Coord::new(1, 2));
        s.push(Coord::new(3, 4));
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Some(Coord::new(3, 4)));
        assert_eq!(s.pop(), Some(Coord::new(1, 2)));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_queue_fifo_order() {
        let mut q = CoordQueue::with_capacity(4);
        assert!(q.is_empty());
        q.enqueue(Coord::new(1, 2));
        q.enqueue(Coord::new(3, 4));
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Some(Coord::new(1, 2)));
        assert_eq!(q.dequeue(), Some(Coord::new(3, 4)));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_out_of_range_coords_allowed() {
        let mut s = CoordStack::default();
        s.push(Coord::new(-1, -1));
        assert_eq!(s.pop(), Some(Coord::new(-1, -1)));
    }
}
