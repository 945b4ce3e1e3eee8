//! `arcgraph dfs`, `arcgraph bfs` and `arcgraph bfs-to`

use serde_json::json;
use tracing::debug;

use arcgraph_core::error::{GraphError, Result};
use arcgraph_core::format::{self, OutputFormat};
use arcgraph_core::graph::{Labeled, NodeHandle};

use super::dispatch::{label_of, resolve_node, CommandContext, RecordGraph};

/// Nodes in the order a traversal visited them
type Visits = Vec<(NodeHandle, String)>;

pub fn execute_dfs(ctx: &CommandContext, start: &str) -> Result<()> {
    let graph = ctx.load_graph()?;
    let start = resolve_node(&graph, start)?;

    let mut state = graph.search_state();
    let mut visits = Visits::new();
    graph.depth_first(start, &mut state, |handle, payload| {
        visits.push((handle, payload.label().to_string()));
    })?;

    debug!(visited = visits.len(), elapsed = ?ctx.start.elapsed(), "dfs");
    print_visits(ctx.format(), &visits)
}

pub fn execute_bfs(ctx: &CommandContext, start: &str) -> Result<()> {
    let graph = ctx.load_graph()?;
    let start = resolve_node(&graph, start)?;

    let mut state = graph.search_state();
    let mut visits = Visits::new();
    graph.breadth_first(start, &mut state, |handle, payload| {
        visits.push((handle, payload.label().to_string()));
    })?;

    debug!(visited = visits.len(), elapsed = ?ctx.start.elapsed(), "bfs");
    print_visits(ctx.format(), &visits)
}

pub fn execute_bfs_to(ctx: &CommandContext, start: &str, target: &str) -> Result<()> {
    let graph = ctx.load_graph()?;
    let start = resolve_node(&graph, start)?;
    let target = resolve_node(&graph, target)?;

    let mut state = graph.search_state();
    let mut visits = Visits::new();
    let found = graph.breadth_first_to(start, target, &mut state, |handle, payload| {
        visits.push((handle, payload.label().to_string()));
    })?;

    debug!(found, visited = visits.len(), elapsed = ?ctx.start.elapsed(), "bfs_to");

    let chain = if found {
        state.predecessor_chain(target)
    } else {
        None
    };

    let Some(chain) = chain else {
        // Visit lines are still useful when the target is missed
        if ctx.format() != OutputFormat::Json && !ctx.cli.quiet {
            print_visits(ctx.format(), &visits)?;
        }
        return Err(GraphError::UnreachableTarget {
            from: start,
            to: target,
        });
    };

    match ctx.format() {
        OutputFormat::Json => {
            let output = json!({
                "found": true,
                "visited": visits_json(&visits),
                "trackback": chain_json(&graph, &chain),
            });
            println!("{}", format::to_json(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                print_visits(OutputFormat::Human, &visits)?;
            }
            for handle in &chain {
                println!("{}", format::trackback_line(&label_of(&graph, *handle)));
            }
        }
        OutputFormat::Records => {
            if !ctx.cli.quiet {
                print_visits(OutputFormat::Records, &visits)?;
            }
            for handle in &chain {
                println!(
                    "{}",
                    format::trackback_record(*handle, &label_of(&graph, *handle))
                );
            }
        }
    }

    Ok(())
}

fn print_visits(format: OutputFormat, visits: &[(NodeHandle, String)]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = json!({ "visited": visits_json(visits) });
            println!("{}", format::to_json(&output)?);
        }
        OutputFormat::Human => {
            for (_, label) in visits {
                println!("{}", format::visit_line(label));
            }
        }
        OutputFormat::Records => {
            for (handle, label) in visits {
                println!("{}", format::visit_record(*handle, label));
            }
        }
    }
    Ok(())
}

fn visits_json(visits: &[(NodeHandle, String)]) -> serde_json::Value {
    visits
        .iter()
        .map(|(handle, label)| json!({ "handle": handle, "label": label }))
        .collect()
}

fn chain_json(graph: &RecordGraph, chain: &[NodeHandle]) -> serde_json::Value {
    chain
        .iter()
        .map(|handle| json!({ "handle": handle, "label": label_of(graph, *handle) }))
        .collect()
}
