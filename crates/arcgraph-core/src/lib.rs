//! Arcgraph Core Library
//!
//! Fixed-capacity directed weighted graph with depth-first, breadth-first
//! and uniform-cost search, plus record loading and output rendering for
//! the `arcgraph` command-line tool.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
