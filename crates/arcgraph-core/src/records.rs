//! Node and arc record ingestion
//!
//! Two flat, whitespace-separated text formats feed a graph:
//! - node records: one label per token, assigned handles 0, 1, 2, ... in
//!   order; `label:attribute` also sets the node's integer attribute
//! - arc records: `from to weight` triples of handles and a weight
//!
//! Anything after a `#` on a line is a comment.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::{Cost, Graph, NodeHandle, NodePayload};

/// How arc records are inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcMode {
    /// One arc per record (`add_arc`)
    #[default]
    Directed,
    /// Both directions per record (`add_dual_arc`)
    Dual,
}

impl FromStr for ArcMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(ArcMode::Directed),
            "dual" | "undirected" => Ok(ArcMode::Dual),
            other => Err(GraphError::invalid_value("arc mode", other)),
        }
    }
}

impl fmt::Display for ArcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcMode::Directed => write!(f, "directed"),
            ArcMode::Dual => write!(f, "dual"),
        }
    }
}

/// One `from to weight` arc record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRecord<W> {
    pub from: NodeHandle,
    pub to: NodeHandle,
    pub weight: W,
}

/// Summary of a graph build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub nodes: usize,
    pub arcs: usize,
    pub skipped_arcs: usize,
}

/// Tokens of a record file, each tagged with its 1-based line number
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().flat_map(|(index, line)| {
        let content = line.split('#').next().unwrap_or("");
        content
            .split_whitespace()
            .map(move |token| (index + 1, token))
    })
}

/// Parse node records
pub fn parse_node_records(text: &str) -> Result<Vec<NodePayload>> {
    tokens(text)
        .map(|(line, token)| match token.split_once(':') {
            Some((label, attribute)) => {
                let attribute = attribute.parse::<i64>().map_err(|e| {
                    GraphError::parse(None, line, format!("bad attribute {attribute:?}: {e}"))
                })?;
                Ok(NodePayload::new(label).with_attribute(attribute))
            }
            None => Ok(NodePayload::new(token)),
        })
        .collect()
}

/// Parse `from to weight` arc records
pub fn parse_arc_records<W>(text: &str) -> Result<Vec<ArcRecord<W>>>
where
    W: Cost + FromStr,
    W::Err: std::fmt::Display,
{
    fn handle(line: usize, token: &str) -> Result<NodeHandle> {
        token
            .parse::<usize>()
            .map(NodeHandle::new)
            .map_err(|e| GraphError::parse(None, line, format!("bad handle {token:?}: {e}")))
    }

    let all: Vec<(usize, &str)> = tokens(text).collect();
    let mut chunks = all.chunks_exact(3);
    let mut records = Vec::with_capacity(all.len() / 3);

    for chunk in &mut chunks {
        let (line, from) = chunk[0];
        let (_, to) = chunk[1];
        let (weight_line, weight) = chunk[2];
        records.push(ArcRecord {
            from: handle(line, from)?,
            to: handle(chunk[1].0, to)?,
            weight: weight.parse::<W>().map_err(|e| {
                GraphError::parse(None, weight_line, format!("bad weight {weight:?}: {e}"))
            })?,
        });
    }

    if let Some((line, _)) = chunks.remainder().first() {
        return Err(GraphError::parse(
            None,
            *line,
            "incomplete arc record (expected: from to weight)",
        ));
    }

    Ok(records)
}

/// Build a graph from parsed records
///
/// `capacity` defaults to the number of node records. Arcs the graph
/// refuses as duplicates or with missing endpoints are skipped with a
/// warning; out-of-range handles and negative weights abort the build.
pub fn build_graph<W: Cost>(
    nodes: Vec<NodePayload>,
    arcs: &[ArcRecord<W>],
    capacity: Option<usize>,
    mode: ArcMode,
) -> Result<(Graph<NodePayload, W>, IngestReport)> {
    let capacity = capacity.unwrap_or(nodes.len());
    if capacity < nodes.len() {
        bail_invalid!(
            "capacity",
            format!("{} (node file has {} records)", capacity, nodes.len())
        );
    }

    let mut graph = Graph::new(capacity);
    let mut report = IngestReport::default();

    for (index, payload) in nodes.into_iter().enumerate() {
        graph.add_node(payload, NodeHandle::new(index))?;
        report.nodes += 1;
    }

    for record in arcs {
        let added = match mode {
            ArcMode::Directed => graph.add_arc(record.from, record.to, record.weight),
            ArcMode::Dual => graph.add_dual_arc(record.from, record.to, record.weight),
        };
        match added {
            Ok(()) => {
                debug!(from = %record.from, to = %record.to, weight = %record.weight, "added arc");
                report.arcs += 1;
            }
            Err(err @ (GraphError::DuplicateArc { .. } | GraphError::MissingEndpoint { .. })) => {
                warn!(from = %record.from, to = %record.to, error = %err, "skipping arc record");
                report.skipped_arcs += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok((graph, report))
}

/// Read both record files and build a graph
pub fn load_graph<W>(
    nodes_path: &Path,
    arcs_path: &Path,
    capacity: Option<usize>,
    mode: ArcMode,
) -> Result<(Graph<NodePayload, W>, IngestReport)>
where
    W: Cost + FromStr,
    W::Err: std::fmt::Display,
{
    let node_text = read_records(nodes_path)?;
    let arc_text = read_records(arcs_path)?;

    let nodes = parse_node_records(&node_text).map_err(|e| e.with_path(nodes_path))?;
    let arcs = parse_arc_records::<W>(&arc_text).map_err(|e| e.with_path(arcs_path))?;

    build_graph(nodes, &arcs, capacity, mode)
}

fn read_records(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GraphError::io_operation("read", path.display(), e))
}
