//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::records::ArcMode;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "arcgraph.toml";

/// Graph loading configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Node record file
    #[serde(default = "default_nodes")]
    pub nodes: PathBuf,

    /// Arc record file
    #[serde(default = "default_arcs")]
    pub arcs: PathBuf,

    /// Slot capacity (optional; defaults to the number of node records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Arc insertion mode
    #[serde(default)]
    pub mode: ArcMode,

    /// Batch precomputation settings
    #[serde(default)]
    pub precompute: PrecomputeConfig,
}

/// Configuration for batch path precomputation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecomputeConfig {
    /// Number of leading handles to precompute over (all occupied handles if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            nodes: default_nodes(),
            arcs: default_arcs(),
            capacity: None,
            mode: ArcMode::default(),
            precompute: PrecomputeConfig::default(),
        }
    }
}

fn default_nodes() -> PathBuf {
    PathBuf::from("nodes.txt")
}

fn default_arcs() -> PathBuf {
    PathBuf::from("arcs.txt")
}
