//! Fixed-capacity graph container
//!
//! Nodes live in an arena of optional slots addressed by [`NodeHandle`].
//! Arcs store target handles rather than references, so removing a node
//! only has to purge the arcs that point at it before clearing the slot.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::node::{Arc, Node};
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, Labeled, NodeHandle};

/// A directed graph with a fixed number of node slots.
///
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | O(1) | |
/// | `remove_node` | O(V + E) | Scans every occupied node for incoming arcs |
/// | `add_arc` | O(out-degree) | Checks for an existing arc first |
/// | `remove_arc` | O(out-degree) | |
#[derive(Debug, Clone)]
pub struct Graph<N, W = u32> {
    slots: Vec<Option<Node<N, W>>>,
    count: usize,
}

impl<N, W: Cost> Graph<N, W> {
    /// Creates an empty graph with `capacity` unoccupied slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Graph { slots, count: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn node_count(&self) -> usize {
        self.count
    }

    pub fn arc_count(&self) -> usize {
        self.nodes().map(|(_, node)| node.out_degree()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `Err(InvalidHandle)` unless `handle` addresses a slot.
    pub fn check_handle(&self, handle: NodeHandle) -> Result<()> {
        if handle.index() < self.slots.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidHandle {
                handle,
                capacity: self.slots.len(),
            })
        }
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.node(handle).is_some()
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node<N, W>> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<N, W>> {
        self.slots.get_mut(handle.index()).and_then(Option::as_mut)
    }

    /// Iterates occupied slots in handle order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeHandle, &Node<N, W>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|node| (NodeHandle::new(index), node)))
    }

    pub fn handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.nodes().map(|(handle, _)| handle)
    }

    /// First occupied handle whose payload matches `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<NodeHandle>
    where
        P: FnMut(&N) -> bool,
    {
        self.nodes()
            .find(|(_, node)| predicate(node.payload()))
            .map(|(handle, _)| handle)
    }

    /// Allocates a fresh search state sized for this graph.
    pub fn search_state(&self) -> SearchState<W> {
        SearchState::new(self.capacity())
    }

    /// Stores `payload` at `handle`.
    ///
    /// Fails without mutating the graph if the slot is taken.
    pub fn add_node(&mut self, payload: N, handle: NodeHandle) -> Result<()> {
        self.check_handle(handle)?;
        let slot = &mut self.slots[handle.index()];
        if slot.is_some() {
            debug!(%handle, "add_node rejected: slot occupied");
            return Err(GraphError::OccupiedSlot { handle });
        }
        *slot = Some(Node::new(payload));
        self.count += 1;
        Ok(())
    }

    /// Removes the node at `handle` together with every arc pointing at it.
    ///
    /// Returns `Ok(None)` if the slot was already empty.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Result<Option<Node<N, W>>> {
        self.check_handle(handle)?;
        if self.slots[handle.index()].is_none() {
            return Ok(None);
        }

        // Incoming arcs must be gone before the slot can be reused.
        let mut purged = 0usize;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if index == handle.index() {
                continue;
            }
            if let Some(node) = slot {
                if node.remove_arc_to(handle).is_some() {
                    purged += 1;
                }
            }
        }

        let removed = self.slots[handle.index()].take();
        self.count -= 1;
        debug!(%handle, purged, "removed node");
        Ok(removed)
    }

    /// Adds the arc `from -> to`.
    ///
    /// Fails if either endpoint is empty, if the arc already exists, or if
    /// `weight` is negative. The reverse direction is not checked.
    pub fn add_arc(&mut self, from: NodeHandle, to: NodeHandle, weight: W) -> Result<()> {
        self.check_arc_insert(from, to, weight)?;
        self.push_arc(from, to, weight);
        Ok(())
    }

    /// Adds both `from -> to` and `to -> from` with the same weight.
    ///
    /// Both directions are checked for an existing arc, so a pair that is
    /// already linked in either direction is rejected as a whole.
    pub fn add_dual_arc(&mut self, from: NodeHandle, to: NodeHandle, weight: W) -> Result<()> {
        self.check_arc_insert(from, to, weight)?;
        if self.has_arc(to, from) {
            debug!(%from, %to, "add_dual_arc rejected: reverse arc exists");
            return Err(GraphError::DuplicateArc { from: to, to: from });
        }
        self.push_arc(from, to, weight);
        if from != to {
            self.push_arc(to, from, weight);
        }
        Ok(())
    }

    /// Removes the arc `from -> to`, returning it if it existed.
    pub fn remove_arc(&mut self, from: NodeHandle, to: NodeHandle) -> Result<Option<Arc<W>>> {
        self.check_handle(from)?;
        self.check_handle(to)?;
        if !self.contains(to) {
            return Ok(None);
        }
        Ok(self
            .node_mut(from)
            .and_then(|node| node.remove_arc_to(to)))
    }

    /// Looks up the arc `from -> to`.
    pub fn get_arc(&self, from: NodeHandle, to: NodeHandle) -> Result<Option<&Arc<W>>> {
        self.check_handle(from)?;
        self.check_handle(to)?;
        if !self.contains(to) {
            return Ok(None);
        }
        Ok(self.node(from).and_then(|node| node.arc_to(to)))
    }

    fn has_arc(&self, from: NodeHandle, to: NodeHandle) -> bool {
        self.node(from).is_some_and(|node| node.arc_to(to).is_some())
    }

    fn check_arc_insert(&self, from: NodeHandle, to: NodeHandle, weight: W) -> Result<()> {
        self.check_handle(from)?;
        self.check_handle(to)?;
        for handle in [from, to] {
            if !self.contains(handle) {
                debug!(%from, %to, missing = %handle, "arc rejected: missing endpoint");
                return Err(GraphError::MissingEndpoint { handle });
            }
        }
        if self.has_arc(from, to) {
            debug!(%from, %to, "arc rejected: duplicate");
            return Err(GraphError::DuplicateArc { from, to });
        }
        if !weight.is_ordered() {
            debug!(%from, %to, "arc rejected: unordered weight");
            return Err(GraphError::UnorderedWeight { from, to });
        }
        if weight.is_negative() {
            return Err(GraphError::NegativeWeight { from, to });
        }
        Ok(())
    }

    fn push_arc(&mut self, from: NodeHandle, to: NodeHandle, weight: W) {
        if let Some(node) = self.node_mut(from) {
            node.push_arc(to, weight);
        }
    }
}

impl<N: Labeled, W: Cost> Graph<N, W> {
    /// First occupied handle whose payload carries `label`.
    pub fn find_by_label(&self, label: &str) -> Option<NodeHandle> {
        self.find(|payload| payload.label() == label)
    }

    /// Label of the node at `handle`, if occupied.
    pub fn label(&self, handle: NodeHandle) -> Option<&str> {
        self.node(handle).map(|node| node.payload().label())
    }
}
