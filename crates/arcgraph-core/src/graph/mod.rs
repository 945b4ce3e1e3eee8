//! Graph container, traversals and path-finding
//!
//! Provides the in-memory graph and the algorithms that run over it:
//! - Fixed-capacity node arena with handle-addressed arcs
//! - Depth-first and breadth-first traversal with caller-owned search state
//! - Uniform-cost (Dijkstra) search with predecessor-chain reconstruction
//! - Batch shortest-path precomputation over a node subset

pub mod algos;
pub mod container;
pub mod node;
pub mod path;
pub mod state;
pub mod types;

pub use algos::{Frontier, PathTable, PathTableEntry};
pub use container::Graph;
pub use node::{Arc, Node};
pub use path::{LabelledPath, PathStep, ShortestPath};
pub use state::SearchState;
pub use types::{Cost, Labeled, NodeHandle, NodePayload};
