use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::algos::shared::{check_state, require_node};
use crate::graph::container::Graph;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, NodeHandle};

impl<N, W: Cost> Graph<N, W> {
    /// Breadth-first traversal of everything reachable from `start`.
    ///
    /// Nodes are marked when enqueued and visited when dequeued, so the
    /// visit order is the enqueue order. Marks are left in `state`.
    pub fn breadth_first<F>(
        &self,
        start: NodeHandle,
        state: &mut SearchState<W>,
        mut visit: F,
    ) -> Result<()>
    where
        F: FnMut(NodeHandle, &N),
    {
        check_state(self, state)?;
        require_node(self, start)?;

        let mut queue = VecDeque::new();
        queue.push_back(start);
        state.mark(start);

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.node(current) else {
                continue;
            };
            visit(current, node.payload());

            for neighbor in node.neighbors() {
                if !state.is_marked(neighbor) {
                    state.mark(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(())
    }

    /// Breadth-first search from `start` that stops once `target` is discovered.
    ///
    /// Every newly discovered node records its discoverer as predecessor,
    /// so the chain from `target` back to `start` has the fewest arcs. The
    /// search stops when `target` is first seen on an arc, not when it is
    /// dequeued; `target` itself is therefore never visited unless it is
    /// `start`. Returns `false` when the frontier runs dry first, in which
    /// case `target` has no predecessor.
    pub fn breadth_first_to<F>(
        &self,
        start: NodeHandle,
        target: NodeHandle,
        state: &mut SearchState<W>,
        mut visit: F,
    ) -> Result<bool>
    where
        F: FnMut(NodeHandle, &N),
    {
        check_state(self, state)?;
        let start_node = require_node(self, start)?;
        require_node(self, target)?;

        if start == target {
            visit(start, start_node.payload());
            state.mark(start);
            return Ok(true);
        }

        let mut queue = VecDeque::new();
        queue.push_back(start);
        state.mark(start);

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.node(current) else {
                continue;
            };
            visit(current, node.payload());

            for neighbor in node.neighbors() {
                // The target is checked before its mark, so a stale mark
                // cannot hide it.
                if neighbor == target {
                    state.set_predecessor(target, current);
                    debug!(%start, %target, discovered_by = %current, "bfs found target");
                    return Ok(true);
                }
                if !state.is_marked(neighbor) {
                    trace!(from = %current, to = %neighbor, "bfs discover");
                    state.mark(neighbor);
                    state.set_predecessor(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(%start, %target, "bfs exhausted frontier without finding target");
        Ok(false)
    }

    /// Fewest-arc path from `start` to `target` using a fresh state.
    ///
    /// Returns the handles in source-to-target order, or `None` when
    /// `target` is unreachable.
    pub fn bfs_path(&self, start: NodeHandle, target: NodeHandle) -> Result<Option<Vec<NodeHandle>>> {
        let mut state = self.search_state();
        if !self.breadth_first_to(start, target, &mut state, |_, _| {})? {
            return Ok(None);
        }
        Ok(state.predecessor_chain(target).map(|mut chain| {
            chain.reverse();
            chain
        }))
    }
}
