//! `arcgraph info` - graph size summary

use serde_json::json;

use arcgraph_core::error::Result;
use arcgraph_core::format::{self, OutputFormat};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;

    let nodes = graph.node_count();
    let arcs = graph.arc_count();
    let capacity = graph.capacity();

    match ctx.format() {
        OutputFormat::Json => {
            let output = json!({
                "nodes": nodes,
                "arcs": arcs,
                "capacity": capacity,
                "mode": ctx.config.mode,
            });
            println!("{}", format::to_json(&output)?);
        }
        OutputFormat::Human => {
            println!("Nodes: {}", nodes);
            println!("Arcs: {}", arcs);
            println!("Capacity: {}", capacity);
        }
        OutputFormat::Records => {
            println!(
                "G nodes={} arcs={} capacity={} mode={}",
                nodes, arcs, capacity, ctx.config.mode
            );
        }
    }

    Ok(())
}
