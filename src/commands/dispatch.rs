//! Command dispatch logic for arcgraph

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use arcgraph_core::config::{ConfigOverrides, GraphConfig};
use arcgraph_core::error::{GraphError, Result};
use arcgraph_core::format::OutputFormat;
use arcgraph_core::graph::{Graph, NodeHandle, NodePayload};
use arcgraph_core::records::{self, IngestReport};
use arcgraph_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Graph type every command runs against
pub type RecordGraph = Graph<NodePayload, u32>;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }

    /// Read the configured record files into a graph
    pub fn load_graph(&self) -> Result<RecordGraph> {
        let load_start = Instant::now();
        let (graph, report) = records::load_graph::<u32>(
            &self.config.nodes,
            &self.config.arcs,
            self.config.capacity,
            self.config.mode,
        )?;
        trace_time!(load_start, "load_graph", nodes = report.nodes, arcs = report.arcs);
        self.report_skipped(&report);
        Ok(graph)
    }

    fn report_skipped(&self, report: &IngestReport) {
        if report.skipped_arcs > 0 && !self.cli.quiet && self.format() == OutputFormat::Human {
            eprintln!(
                "warning: skipped {} arc record(s) (duplicate or missing endpoint)",
                report.skipped_arcs
            );
        }
    }
}

/// Resolve a node argument given as a handle number or a label
///
/// A numeric argument is tried as a handle first, then as a label.
pub fn resolve_node(graph: &RecordGraph, arg: &str) -> Result<NodeHandle> {
    if let Ok(index) = arg.parse::<usize>() {
        let handle = NodeHandle::new(index);
        if graph.contains(handle) {
            return Ok(handle);
        }
        if let Some(handle) = graph.find_by_label(arg) {
            return Ok(handle);
        }
        graph.check_handle(handle)?;
        return Err(GraphError::MissingEndpoint { handle });
    }

    graph
        .find_by_label(arg)
        .ok_or_else(|| GraphError::not_found("node", arg))
}

/// Label of an occupied slot, or its handle number
pub fn label_of(graph: &RecordGraph, handle: NodeHandle) -> String {
    graph
        .label(handle)
        .map(str::to_string)
        .unwrap_or_else(|| handle.to_string())
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = GraphConfig::discover(cli.config.as_deref(), &dir)?.apply_overrides(
        ConfigOverrides {
            nodes: cli.nodes.clone(),
            arcs: cli.arcs.clone(),
            capacity: cli.capacity,
            dual: cli.dual,
            limit: match &cli.command {
                Commands::Precompute { limit } => *limit,
                _ => None,
            },
        },
    );

    debug!(elapsed = ?start.elapsed(), config = ?config, "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        Commands::Dfs { start } => commands::traverse::execute_dfs(&ctx, start),
        Commands::Bfs { start } => commands::traverse::execute_bfs(&ctx, start),
        Commands::BfsTo { start, target } => commands::traverse::execute_bfs_to(&ctx, start, target),
        Commands::Path { from, to } => commands::path::execute(&ctx, from, to),
        Commands::Precompute { .. } => commands::precompute::execute(&ctx),
        Commands::Info => commands::info::execute(&ctx),
    }
}
