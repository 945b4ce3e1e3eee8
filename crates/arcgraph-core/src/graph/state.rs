//! Per-query search state
//!
//! Visited marks, tentative distances and predecessor links live here
//! rather than on the nodes, so the graph itself stays read-only during a
//! search and each caller owns the scratch data of its own query.

use crate::graph::types::{Cost, NodeHandle};

/// Scratch record for one traversal or search, indexed by node handle.
///
/// Marks set by a traversal persist until [`clear_marks`](Self::clear_marks)
/// or [`reset`](Self::reset) is called; reusing a state without clearing it
/// makes later traversals skip the nodes an earlier one already marked.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<W> {
    marked: Vec<bool>,
    distance: Vec<Option<W>>,
    predecessor: Vec<Option<NodeHandle>>,
}

impl<W: Cost> SearchState<W> {
    pub fn new(capacity: usize) -> Self {
        SearchState {
            marked: vec![false; capacity],
            distance: vec![None; capacity],
            predecessor: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.marked.len()
    }

    /// Unmarks every node, leaving distances and predecessors alone.
    pub fn clear_marks(&mut self) {
        self.marked.fill(false);
    }

    /// Unmarks every node, sets every distance to infinity and drops every
    /// predecessor link.
    pub fn reset(&mut self) {
        self.marked.fill(false);
        self.distance.fill(None);
        self.predecessor.fill(None);
    }

    pub fn is_marked(&self, handle: NodeHandle) -> bool {
        self.marked.get(handle.index()).copied().unwrap_or(false)
    }

    /// Best known distance, or `None` for infinity.
    pub fn distance(&self, handle: NodeHandle) -> Option<W> {
        self.distance.get(handle.index()).copied().flatten()
    }

    pub fn predecessor(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.predecessor.get(handle.index()).copied().flatten()
    }

    /// Number of nodes currently marked.
    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    /// Walks predecessor links back from `target`.
    ///
    /// The chain is in target-to-source order and ends at the first node
    /// without a predecessor. Returns `None` when `target` has neither a
    /// predecessor nor a distance, i.e. the search never reached it.
    pub fn predecessor_chain(&self, target: NodeHandle) -> Option<Vec<NodeHandle>> {
        if target.index() >= self.capacity() {
            return None;
        }
        if self.predecessor(target).is_none() && !self.is_marked(target) {
            return None;
        }

        let mut chain = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            // A chain longer than the slot count can only come from a cycle.
            if chain.len() > self.capacity() {
                return None;
            }
            chain.push(prev);
            current = prev;
        }
        Some(chain)
    }

    pub(crate) fn mark(&mut self, handle: NodeHandle) {
        self.marked[handle.index()] = true;
    }

    pub(crate) fn set_distance(&mut self, handle: NodeHandle, distance: W) {
        self.distance[handle.index()] = Some(distance);
    }

    pub(crate) fn set_predecessor(&mut self, handle: NodeHandle, prev: NodeHandle) {
        self.predecessor[handle.index()] = Some(prev);
    }
}
