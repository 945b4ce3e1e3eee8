//! Path reconstruction and path value types

use serde::Serialize;

use crate::graph::container::Graph;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, Labeled, NodeHandle};

/// One node on a shortest path with its cumulative distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathStep<W> {
    pub handle: NodeHandle,
    pub distance: W,
}

/// A shortest path in source-to-target order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<W> {
    steps: Vec<PathStep<W>>,
}

impl<W: Cost> ShortestPath<W> {
    /// Rebuilds the path ending at `target` from a finished search.
    ///
    /// Returns `None` if the search never reached `target` or if a node on
    /// the chain has no recorded distance.
    pub fn from_state(state: &SearchState<W>, target: NodeHandle) -> Option<Self> {
        let chain = state.predecessor_chain(target)?;
        let steps = chain
            .into_iter()
            .rev()
            .map(|handle| {
                state
                    .distance(handle)
                    .map(|distance| PathStep { handle, distance })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(ShortestPath { steps })
    }

    pub fn steps(&self) -> &[PathStep<W>] {
        &self.steps
    }

    pub fn source(&self) -> NodeHandle {
        self.steps[0].handle
    }

    pub fn target(&self) -> NodeHandle {
        self.steps[self.steps.len() - 1].handle
    }

    /// Cumulative distance at the target.
    pub fn total_cost(&self) -> W {
        self.steps[self.steps.len() - 1].distance
    }

    pub fn handles(&self) -> Vec<NodeHandle> {
        self.steps.iter().map(|step| step.handle).collect()
    }

    /// Number of nodes on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Cost of each hop: zero for the source, then the difference between
    /// consecutive cumulative distances.
    pub fn hop_costs(&self) -> impl Iterator<Item = (NodeHandle, W)> + '_ {
        let mut last = W::zero();
        self.steps.iter().map(move |step| {
            let hop = step.distance - last;
            last = step.distance;
            (step.handle, hop)
        })
    }

    /// Converts the path to `(label, hop cost)` pairs.
    pub fn labelled<N: Labeled>(&self, graph: &Graph<N, W>) -> LabelledPath<W> {
        let hops = self
            .hop_costs()
            .map(|(handle, cost)| {
                let label = graph
                    .label(handle)
                    .map(str::to_string)
                    .unwrap_or_else(|| handle.to_string());
                (label, cost)
            })
            .collect();
        LabelledPath {
            hops,
            total: self.total_cost(),
        }
    }
}

/// A path rendered as `(label, hop cost)` pairs, source first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledPath<W> {
    pub hops: Vec<(String, W)>,
    total: W,
}

impl<W: Cost> LabelledPath<W> {
    /// Builds a path from hop costs; `None` if their sum overflows.
    pub fn from_hops(hops: Vec<(String, W)>) -> Option<Self> {
        let total = hops
            .iter()
            .try_fold(W::zero(), |acc, (_, cost)| acc.checked_add(*cost))?;
        Some(LabelledPath { hops, total })
    }

    /// Sum of the hop costs.
    pub fn total(&self) -> W {
        self.total
    }

    pub fn first_label(&self) -> Option<&str> {
        self.hops.first().map(|(label, _)| label.as_str())
    }

    pub fn last_label(&self) -> Option<&str> {
        self.hops.last().map(|(label, _)| label.as_str())
    }
}
