//! Graph loading configuration for arcgraph
//!
//! Settings come from an optional `arcgraph.toml`; command-line flags are
//! applied on top with [`GraphConfig::apply_overrides`].

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::records::ArcMode;

pub use types::{GraphConfig, PrecomputeConfig, DEFAULT_CONFIG_FILE};

/// Values given on the command line, each overriding the file when present
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub nodes: Option<PathBuf>,
    pub arcs: Option<PathBuf>,
    pub capacity: Option<usize>,
    pub dual: bool,
    pub limit: Option<usize>,
}

impl GraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: GraphConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. Without one, `arcgraph.toml` in `dir` is
    /// used if present and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line values on top of the file values
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(nodes) = overrides.nodes {
            self.nodes = nodes;
        }
        if let Some(arcs) = overrides.arcs {
            self.arcs = arcs;
        }
        if overrides.capacity.is_some() {
            self.capacity = overrides.capacity;
        }
        if overrides.dual {
            self.mode = ArcMode::Dual;
        }
        if overrides.limit.is_some() {
            self.precompute.limit = overrides.limit;
        }
        self
    }
}
