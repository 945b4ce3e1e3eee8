//! Output format handling for arcgraph
//!
//! Supports three output formats:
//! - human: readable traversal and path listings for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented format, one fact per line

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Cost, LabelledPath, NodeHandle, PathTable, PathTableEntry};

/// Output format for arcgraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// `Visiting: <label>`
pub fn visit_line(label: &str) -> String {
    format!("Visiting: {}", label)
}

/// `V <handle> <label>`
pub fn visit_record(handle: NodeHandle, label: &str) -> String {
    format!("V {} {}", handle, label)
}

/// `Trackback: <label>`
pub fn trackback_line(label: &str) -> String {
    format!("Trackback: {}", label)
}

/// `T <handle> <label>`
pub fn trackback_record(handle: NodeHandle, label: &str) -> String {
    format!("T {} {}", handle, label)
}

/// Multi-line path block:
///
/// ```text
/// Path from A to D
/// Node: A, 0
/// Node: B, 1
/// Path total cost: 1
/// ```
pub fn render_path_human<W: Cost>(path: &LabelledPath<W>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Path from {} to {}",
        path.first_label().unwrap_or_default(),
        path.last_label().unwrap_or_default()
    );
    for (label, cost) in &path.hops {
        let _ = writeln!(out, "Node: {}, {}", label, cost);
    }
    let _ = write!(out, "Path total cost: {}", path.total());
    out
}

/// Compact two-line pair form used for precomputed tables:
///
/// ```text
/// [A-D] [4]
/// A(0)->B(1)->C(2)->D(1)
/// ```
///
/// Unreachable pairs render as a single `[A-D] unreachable` line.
pub fn render_pair_short<W: Cost>(
    from_label: &str,
    to_label: &str,
    path: Option<&LabelledPath<W>>,
) -> String {
    match path {
        Some(path) => {
            let chain = path
                .hops
                .iter()
                .map(|(label, cost)| format!("{}({})", label, cost))
                .collect::<Vec<_>>()
                .join("->");
            format!("[{}-{}] [{}]\n{}", from_label, to_label, path.total(), chain)
        }
        None => format!("[{}-{}] unreachable", from_label, to_label),
    }
}

/// Records form of a path: a `P` header and one `S` line per step
pub fn render_path_records<W: Cost>(path: &LabelledPath<W>) -> String {
    let mut out = format!(
        "P from={} to={} cost={}",
        path.first_label().unwrap_or_default(),
        path.last_label().unwrap_or_default(),
        path.total()
    );
    for (label, cost) in &path.hops {
        let _ = write!(out, "\nS {} {}", label, cost);
    }
    out
}

/// Records form of an unreachable pair
pub fn render_unreachable_record(from_label: &str, to_label: &str) -> String {
    format!("P from={} to={} unreachable", from_label, to_label)
}

/// Render every entry of a path table in the requested format
///
/// `label_of` resolves the endpoint labels of unreachable pairs, which carry
/// no labelled path of their own.
pub fn render_table<W, F>(table: &PathTable<W>, format: OutputFormat, label_of: F) -> Result<String>
where
    W: Cost + Serialize,
    F: Fn(NodeHandle) -> String,
{
    if format == OutputFormat::Json {
        return to_json(table);
    }

    let blocks: Vec<String> = table
        .iter()
        .map(|entry| render_table_entry(entry, format, &label_of))
        .collect();
    Ok(blocks.join("\n"))
}

fn render_table_entry<W, F>(entry: &PathTableEntry<W>, format: OutputFormat, label_of: &F) -> String
where
    W: Cost,
    F: Fn(NodeHandle) -> String,
{
    let from = label_of(entry.from);
    let to = label_of(entry.to);
    match (format, entry.path.as_ref()) {
        (OutputFormat::Records, Some(path)) => render_path_records(path),
        (OutputFormat::Records, None) => render_unreachable_record(&from, &to),
        (_, path) => render_pair_short(&from, &to, path),
    }
}

/// Pretty-printed JSON for any serializable result
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
