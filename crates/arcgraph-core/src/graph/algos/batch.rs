use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::graph::algos::shared::require_node;
use crate::graph::container::Graph;
use crate::graph::path::LabelledPath;
use crate::graph::types::{Cost, Labeled, NodeHandle};

/// One precomputed pair in a [`PathTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathTableEntry<W> {
    pub from: NodeHandle,
    pub to: NodeHandle,
    /// `None` when `to` is unreachable from `from`.
    pub path: Option<LabelledPath<W>>,
}

/// Shortest paths between every ordered pair `(i, j)`, `i < j`, of a node subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathTable<W> {
    entries: Vec<PathTableEntry<W>>,
}

impl<W> Default for PathTable<W> {
    fn default() -> Self {
        PathTable {
            entries: Vec::new(),
        }
    }
}

impl<W: Cost> PathTable<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, from: NodeHandle, to: NodeHandle, path: Option<LabelledPath<W>>) {
        self.entries.push(PathTableEntry { from, to, path });
    }

    /// Entry for the pair, or `None` if the pair was not part of the batch.
    pub fn get(&self, from: NodeHandle, to: NodeHandle) -> Option<&PathTableEntry<W>> {
        self.entries
            .iter()
            .find(|entry| entry.from == from && entry.to == to)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathTableEntry<W>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[PathTableEntry<W>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.path.is_some()).count()
    }
}

impl<N: Labeled, W: Cost> Graph<N, W> {
    /// Runs an independent uniform-cost search for every pair `(handles[i],
    /// handles[j])` with `i < j` and collects the labelled paths.
    ///
    /// One search state is shared by all pairs; each search resets it, so no
    /// partial results carry over from one pair to the next.
    #[tracing::instrument(skip(self, handles), fields(subset = handles.len()))]
    pub fn precompute_paths(&self, handles: &[NodeHandle]) -> Result<PathTable<W>> {
        for &handle in handles {
            require_node(self, handle)?;
        }

        let mut table = PathTable::new();
        let mut state = self.search_state();

        for (i, &from) in handles.iter().enumerate() {
            for &to in &handles[i + 1..] {
                let path = self.uniform_cost_search(from, to, &mut state, |_, _| {})?;
                if path.is_none() {
                    debug!(%from, %to, "pair unreachable");
                }
                table.push(from, to, path.map(|p| p.labelled(self)));
            }
        }

        info!(
            pairs = table.len(),
            reachable = table.reachable_count(),
            "precomputed path table"
        );
        Ok(table)
    }
}
