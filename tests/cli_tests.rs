//! Integration tests for the arcgraph CLI
//!
//! These tests run the arcgraph binary against record files written to a
//! temporary directory.

mod cli;
mod support;

use predicates::prelude::*;
use support::{arcgraph, setup_abcd};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    arcgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: arcgraph"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("bfs-to"))
        .stdout(predicate::str::contains("precompute"));
}

#[test]
fn test_version_flag() {
    arcgraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arcgraph"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    arcgraph()
        .args(["--format", "invalid", "info"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_subcommand_exit_code_2() {
    arcgraph().assert().code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    arcgraph()
        .args(["--format", "json", "path", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\": \"usage_error\"").or(
            predicate::str::contains("\"type\":\"usage_error\""),
        ));
}

#[test]
fn test_missing_record_files_exit_code_1() {
    let dir = tempfile::tempdir().unwrap();
    arcgraph()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nodes.txt"));
}

#[test]
fn test_unknown_node_exit_code_3() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["path", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "path", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_bad_arc_record_exit_code_3() {
    let dir = support::setup_graph_dir("A B\n", "0 1\n");
    arcgraph()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 1"));
}
