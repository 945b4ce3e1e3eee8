//! `arcgraph precompute` - cheapest paths between every pair of leading nodes

use std::time::Instant;

use tracing::debug;

use arcgraph_core::bail_usage;
use arcgraph_core::error::Result;
use arcgraph_core::format::{self, OutputFormat};
use arcgraph_core::graph::NodeHandle;
use arcgraph_core::trace_time;

use super::dispatch::{label_of, CommandContext};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.config.precompute.limit == Some(0) {
        bail_usage!("precompute limit must be at least 1");
    }

    let graph = ctx.load_graph()?;

    let limit = ctx.config.precompute.limit.unwrap_or(graph.capacity());
    let handles: Vec<NodeHandle> = graph.handles().filter(|h| h.index() < limit).collect();

    let batch_start = Instant::now();
    let table = graph.precompute_paths(&handles)?;
    trace_time!(batch_start, "precompute_paths", pairs = table.len());

    debug!(
        nodes = handles.len(),
        pairs = table.len(),
        reachable = table.reachable_count(),
        elapsed = ?ctx.start.elapsed(),
        "precompute"
    );

    let rendered = format::render_table(&table, ctx.format(), |h| label_of(&graph, h))?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if ctx.format() == OutputFormat::Human && !ctx.cli.quiet {
        println!();
        println!(
            "{} pairs, {} reachable",
            table.len(),
            table.reachable_count()
        );
    }

    Ok(())
}
