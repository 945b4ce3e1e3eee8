use tracing::trace;

use crate::error::Result;
use crate::graph::algos::shared::{check_state, require_node};
use crate::graph::container::Graph;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, NodeHandle};

impl<N, W: Cost> Graph<N, W> {
    /// Pre-order depth-first traversal from `start`.
    ///
    /// `start` is visited and marked, then each unmarked neighbor is
    /// descended into in arc-insertion order. An explicit stack stands in
    /// for recursion, so long chains cannot overflow the call stack. Marks
    /// are left in `state`; clear them before reusing it.
    pub fn depth_first<F>(
        &self,
        start: NodeHandle,
        state: &mut SearchState<W>,
        mut visit: F,
    ) -> Result<()>
    where
        F: FnMut(NodeHandle, &N),
    {
        check_state(self, state)?;
        let node = require_node(self, start)?;

        visit(start, node.payload());
        state.mark(start);

        // Each frame is a node and the index of its next arc to examine.
        let mut stack: Vec<(NodeHandle, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (current, next_arc) = *frame;
            frame.1 += 1;

            let arc = self
                .node(current)
                .and_then(|node| node.arcs().get(next_arc));
            let Some(arc) = arc else {
                stack.pop();
                continue;
            };

            let neighbor = arc.target();
            if state.is_marked(neighbor) {
                continue;
            }
            if let Some(node) = self.node(neighbor) {
                trace!(from = %current, to = %neighbor, "dfs descend");
                visit(neighbor, node.payload());
                state.mark(neighbor);
                stack.push((neighbor, 0));
            }
        }

        Ok(())
    }
}
