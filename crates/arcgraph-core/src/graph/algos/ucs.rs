use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{check_state, require_node};
use crate::graph::container::Graph;
use crate::graph::path::ShortestPath;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, NodeHandle};

/// Priority frontier for uniform-cost search.
///
/// Entries are bare handles. The minimum is found by reading each entry's
/// distance from the [`SearchState`] at pop time, so a distance lowered
/// after the node was enqueued is honored without a decrease-key step.
/// Ties go to the entry enqueued first.
///
/// A `BinaryHeap` is not used: a node is enqueued once and its distance may
/// drop afterwards, so a key captured at push time would go stale. The scan
/// makes each pop linear in the frontier size.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: Vec<NodeHandle>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: NodeHandle) {
        self.entries.push(handle);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the smallest live distance, without removing it.
    pub fn peek_min<W: Cost>(&self, state: &SearchState<W>) -> Option<NodeHandle> {
        self.min_position(state).map(|pos| self.entries[pos])
    }

    /// Removes and returns the entry with the smallest live distance.
    pub fn pop_min<W: Cost>(&mut self, state: &SearchState<W>) -> Option<NodeHandle> {
        let pos = self.min_position(state)?;
        Some(self.entries.remove(pos))
    }

    fn min_position<W: Cost>(&self, state: &SearchState<W>) -> Option<usize> {
        let mut best: Option<(usize, Option<W>)> = None;
        for (pos, &handle) in self.entries.iter().enumerate() {
            let distance = state.distance(handle);
            let better = match (&best, distance) {
                (None, _) => true,
                (Some((_, None)), Some(_)) => true,
                (Some((_, Some(current))), Some(candidate)) => candidate < *current,
                (Some(_), None) => false,
            };
            if better {
                best = Some((pos, distance));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

impl<N, W: Cost> Graph<N, W> {
    /// Uniform-cost search (Dijkstra without decrease-key) from `start` to `target`.
    ///
    /// `state` is reset first, so stale marks and distances from an earlier
    /// query never leak in. A node is marked when first enqueued and is
    /// enqueued at most once; its priority is its live distance. The search
    /// ends when `target` reaches the front of the frontier or the frontier
    /// empties. `visit` is called once for every node expanded before that.
    ///
    /// Returns `Ok(None)` when `target` is unreachable.
    #[tracing::instrument(skip(self, state, visit), fields(start = %start, target = %target))]
    pub fn uniform_cost_search<F>(
        &self,
        start: NodeHandle,
        target: NodeHandle,
        state: &mut SearchState<W>,
        mut visit: F,
    ) -> Result<Option<ShortestPath<W>>>
    where
        F: FnMut(NodeHandle, &N),
    {
        check_state(self, state)?;
        require_node(self, start)?;
        require_node(self, target)?;

        state.reset();
        state.set_distance(start, W::zero());
        state.mark(start);

        let mut frontier = Frontier::new();
        frontier.push(start);
        let mut expanded = 0usize;

        while let Some(current) = frontier.pop_min(state) {
            if current == target {
                break;
            }
            let Some(node) = self.node(current) else {
                continue;
            };
            let Some(current_distance) = state.distance(current) else {
                continue;
            };
            let came_from = state.predecessor(current);

            visit(current, node.payload());
            expanded += 1;

            for arc in node.arcs() {
                let neighbor = arc.target();
                // Never relax back along the arc we arrived by.
                if Some(neighbor) == came_from {
                    continue;
                }

                let Some(candidate) = current_distance.checked_add(arc.weight()) else {
                    return Err(GraphError::CostOverflow {
                        from: current,
                        to: neighbor,
                    });
                };
                let improves = match state.distance(neighbor) {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves {
                    trace!(from = %current, to = %neighbor, distance = %candidate, "relax");
                    state.set_distance(neighbor, candidate);
                    state.set_predecessor(neighbor, current);
                }

                if !state.is_marked(neighbor) {
                    state.mark(neighbor);
                    frontier.push(neighbor);
                }
            }
        }

        let path = ShortestPath::from_state(state, target);
        debug!(
            expanded,
            found = path.is_some(),
            cost = ?path.as_ref().map(|p| p.total_cost()),
            "ucs finished"
        );
        Ok(path)
    }

    /// Uniform-cost search with a fresh state and no visitor.
    pub fn shortest_path(
        &self,
        start: NodeHandle,
        target: NodeHandle,
    ) -> Result<Option<ShortestPath<W>>> {
        let mut state = self.search_state();
        self.uniform_cost_search(start, target, &mut state, |_, _| {})
    }
}
