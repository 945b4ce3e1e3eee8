//! Node slots and the arcs they own

use serde::Serialize;

use crate::graph::types::NodeHandle;

/// A directed, weighted edge owned by its source node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arc<W> {
    target: NodeHandle,
    weight: W,
}

impl<W: Copy> Arc<W> {
    pub(crate) fn new(target: NodeHandle, weight: W) -> Self {
        Arc { target, weight }
    }

    pub fn target(&self) -> NodeHandle {
        self.target
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A graph node: the caller's payload plus outgoing arcs in insertion order.
#[derive(Debug, Clone)]
pub struct Node<N, W> {
    payload: N,
    outgoing: Vec<Arc<W>>,
}

impl<N, W: Copy> Node<N, W> {
    pub(crate) fn new(payload: N) -> Self {
        Node {
            payload,
            outgoing: Vec::new(),
        }
    }

    pub fn payload(&self) -> &N {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut N {
        &mut self.payload
    }

    pub fn into_payload(self) -> N {
        self.payload
    }

    /// Outgoing arcs in the order they were added.
    pub fn arcs(&self) -> &[Arc<W>] {
        &self.outgoing
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Handles of the arc targets, in arc-insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.outgoing.iter().map(Arc::target)
    }

    pub fn arc_to(&self, target: NodeHandle) -> Option<&Arc<W>> {
        self.outgoing.iter().find(|arc| arc.target == target)
    }

    pub(crate) fn push_arc(&mut self, target: NodeHandle, weight: W) {
        self.outgoing.push(Arc::new(target, weight));
    }

    pub(crate) fn remove_arc_to(&mut self, target: NodeHandle) -> Option<Arc<W>> {
        let pos = self.outgoing.iter().position(|arc| arc.target == target)?;
        Some(self.outgoing.remove(pos))
    }
}
