//! Frontier ordering policies for the search loop.

use std::collections::{BinaryHeap, VecDeque};

/// A heap entry referencing a cell by flat index, keyed by the distance
/// recorded when it was pushed.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct OpenNode {
    pub(crate) idx: usize,
    pub(crate) dist: f32,
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest distance
        // first; ties break on index for determinism.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The set of cells pending expansion.
///
/// FIFO for the unweighted strategy, min-distance priority for Dijkstra
/// and A*. Duplicates are permitted in both: there is no visited set, so a
/// cell may sit in the frontier several times with progressively better
/// distances and be expanded more than once.
pub(crate) enum Frontier {
    Fifo(VecDeque<usize>),
    MinDist(BinaryHeap<OpenNode>),
}

impl Frontier {
    pub(crate) fn fifo() -> Self {
        Self::Fifo(VecDeque::new())
    }

    pub(crate) fn min_dist() -> Self {
        Self::MinDist(BinaryHeap::new())
    }

    /// Insert a cell. `dist` keys the priority ordering and is ignored by
    /// the FIFO policy.
    pub(crate) fn push(&mut self, idx: usize, dist: f32) {
        match self {
            Self::Fifo(q) => q.push_back(idx),
            Self::MinDist(h) => h.push(OpenNode { idx, dist }),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Fifo(q) => q.pop_front(),
            Self::MinDist(h) => h.pop().map(|n| n.idx),
        }
    }
}
