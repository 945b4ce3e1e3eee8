//! CLI argument parsing for arcgraph
//!
//! Global flags choose the record files, arc mode and output format; each
//! subcommand runs one query against the loaded graph.

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arcgraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Arcgraph - traversals and shortest paths over node/arc record files
#[derive(Parser, Debug)]
#[command(name = "arcgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Node record file (default: nodes.txt)
    #[arg(long, global = true)]
    pub nodes: Option<PathBuf>,

    /// Arc record file (default: arcs.txt)
    #[arg(long, global = true)]
    pub arcs: Option<PathBuf>,

    /// Config file (default: ./arcgraph.toml when present)
    #[arg(long, global = true, env = "ARCGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Slot capacity (default: number of node records)
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// Insert every arc record in both directions
    #[arg(long, global = true)]
    pub dual: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `arcgraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Depth-first traversal from a node
    Dfs {
        /// Start node (handle or label)
        start: String,
    },

    /// Breadth-first traversal from a node
    Bfs {
        /// Start node (handle or label)
        start: String,
    },

    /// Breadth-first search for a target, then trace back to the start
    BfsTo {
        /// Start node (handle or label)
        start: String,

        /// Target node (handle or label)
        target: String,
    },

    /// Cheapest path between two nodes (uniform-cost search)
    Path {
        /// Source node (handle or label)
        from: String,

        /// Target node (handle or label)
        to: String,
    },

    /// Cheapest paths between every pair of the leading nodes
    Precompute {
        /// Only use nodes whose handle is below this number
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show node, arc and capacity counts
    Info,
}
