//! Graph algorithm implementations
//!
//! Contains the traversals and searches exposed as methods on
//! [`Graph`](crate::graph::Graph):
//! - `dfs`: Depth-first traversal
//! - `bfs`: Breadth-first traversal, plain and target-seeking
//! - `ucs`: Uniform-cost (Dijkstra) shortest path search
//! - `batch`: All-pairs precomputation over a node subset
//! - `shared`: Precondition checks used by every algorithm

pub mod batch;
pub mod bfs;
pub mod dfs;
pub mod shared;
pub mod ucs;

pub use batch::{PathTable, PathTableEntry};
pub use ucs::Frontier;
