//! `arcgraph path` - cheapest path between two nodes

use serde_json::json;
use tracing::debug;

use arcgraph_core::error::{GraphError, Result};
use arcgraph_core::format::{self, OutputFormat};
use arcgraph_core::graph::Labeled;

use super::dispatch::{resolve_node, CommandContext};

pub fn execute(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let graph = ctx.load_graph()?;
    let from = resolve_node(&graph, from)?;
    let to = resolve_node(&graph, to)?;

    let show_visits = ctx.format() == OutputFormat::Human && !ctx.cli.quiet;
    let mut state = graph.search_state();
    let path = graph.uniform_cost_search(from, to, &mut state, |_, payload| {
        if show_visits {
            println!("{}", format::visit_line(payload.label()));
        }
    })?;

    let Some(path) = path else {
        return Err(GraphError::UnreachableTarget { from, to });
    };

    debug!(
        cost = path.total_cost(),
        edges = path.edge_count(),
        elapsed = ?ctx.start.elapsed(),
        "path"
    );

    let labelled = path.labelled(&graph);
    match ctx.format() {
        OutputFormat::Json => {
            let steps: Vec<serde_json::Value> = path
                .steps()
                .iter()
                .zip(&labelled.hops)
                .map(|(step, (label, cost))| {
                    json!({
                        "handle": step.handle,
                        "label": label,
                        "cost": cost,
                        "distance": step.distance,
                    })
                })
                .collect();
            let output = json!({
                "from": labelled.first_label(),
                "to": labelled.last_label(),
                "total_cost": path.total_cost(),
                "steps": steps,
            });
            println!("{}", format::to_json(&output)?);
        }
        OutputFormat::Human => println!("{}", format::render_path_human(&labelled)),
        OutputFormat::Records => println!("{}", format::render_path_records(&labelled)),
    }

    Ok(())
}
