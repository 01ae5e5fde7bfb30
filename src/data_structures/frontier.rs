use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(tentative distance, vertex)` entries
///
/// Entries pop in ascending distance order, ties broken by the lower vertex
/// index. The same vertex may be queued several times with different
/// distances; callers discard superseded entries when they pop them.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Largest size the heap has reached since creation or the last clear
    peak_len: usize,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            peak_len: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    /// Queues a vertex at the given tentative distance
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
        self.peak_len = 0;
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
