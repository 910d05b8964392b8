use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::data_structures::frontier::{Frontier, FrontierEntry};

/// A binary-heap frontier with lazy deletion
///
/// Stale entries are never removed on update; the relaxation loop skips them
/// when they surface. Ties on distance are broken by station name.
#[derive(Debug)]
pub struct HeapFrontier<W>
where
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, String)>>,
}

impl<W> HeapFrontier<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        HeapFrontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns the smallest distance without removing its entry
    pub fn peek_distance(&self) -> Option<W> {
        self.heap.peek().map(|Reverse((distance, _))| *distance)
    }
}

impl<W> Default for HeapFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W> for HeapFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn push(&mut self, entry: FrontierEntry<W>) {
        self.heap.push(Reverse((entry.distance, entry.station)));
    }

    fn pop_smallest(&mut self) -> Option<FrontierEntry<W>> {
        self.heap
            .pop()
            .map(|Reverse((distance, station))| FrontierEntry { station, distance })
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
