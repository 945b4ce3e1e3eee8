use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

/// Four nodes; the cheapest A->D route (cost 4) is not the direct A->C arc
pub const NODES: &str = "A\nB\nC\nD\n";
pub const ARCS: &str = "0 1 1\n1 2 2\n0 2 5\n2 3 1\n";

/// Get a Command for arcgraph
pub fn arcgraph() -> Command {
    cargo_bin_cmd!("arcgraph")
}

/// Temp dir holding `nodes.txt` and `arcs.txt`
pub fn setup_graph_dir(nodes: &str, arcs: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("nodes.txt"), nodes).unwrap();
    fs::write(dir.path().join("arcs.txt"), arcs).unwrap();
    dir
}

/// Temp dir holding the four-node fixture
pub fn setup_abcd() -> TempDir {
    setup_graph_dir(NODES, ARCS)
}

/// Run arcgraph in `dir` and parse its stdout as JSON
#[allow(dead_code)]
pub fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = arcgraph()
        .current_dir(dir.path())
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
