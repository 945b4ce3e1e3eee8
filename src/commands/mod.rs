//! CLI commands for arcgraph

pub mod dispatch;
pub mod info;
pub mod path;
pub mod precompute;
pub mod traverse;
