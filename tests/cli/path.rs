use crate::support::{arcgraph, run_json, setup_abcd, setup_graph_dir};
use predicates::prelude::*;

#[test]
fn test_path_block_with_visits() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["path", "A", "D"])
        .assert()
        .success()
        .stdout(
            "Visiting: A\nVisiting: B\nVisiting: C\n\
             Path from A to D\n\
             Node: A, 0\nNode: B, 1\nNode: C, 2\nNode: D, 1\n\
             Path total cost: 4\n",
        );
}

#[test]
fn test_path_quiet_omits_visits() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "path", "0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Path from A to D\n"))
        .stdout(predicate::str::contains("Visiting").not());
}

#[test]
fn test_path_records_format() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--format", "records", "path", "A", "C"])
        .assert()
        .success()
        .stdout("P from=A to=C cost=3\nS A 0\nS B 1\nS C 2\n");
}

#[test]
fn test_path_json() {
    let dir = setup_abcd();
    let json = run_json(&dir, &["path", "A", "D"]);
    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "D");
    assert_eq!(json["total_cost"], 4);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[2]["label"], "C");
    assert_eq!(steps[2]["cost"], 2);
    assert_eq!(steps[2]["distance"], 3);
}

#[test]
fn test_path_to_self() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "path", "B", "B"])
        .assert()
        .success()
        .stdout("Path from B to B\nNode: B, 0\nPath total cost: 0\n");
}

#[test]
fn test_path_unreachable_exit_code_3() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["path", "D", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("0 is not reachable from 3"));
}

#[test]
fn test_path_unreachable_json_envelope() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--format", "json", "path", "D", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unreachable_target"));
}

#[test]
fn test_path_duplicate_arc_keeps_first_weight() {
    let dir = setup_graph_dir("A B\n", "0 1 7\n0 1 2\n");
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "--format", "records", "path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P from=A to=B cost=7\n"));
}

#[test]
fn test_skipped_arc_warning() {
    let dir = setup_graph_dir("A B\n", "0 1 7\n0 1 2\n");
    arcgraph()
        .current_dir(dir.path())
        .args(["info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped 1 arc record(s)"));
}

#[test]
fn test_path_cost_overflow_exit_code_3() {
    let dir = setup_graph_dir("A B C\n", "0 1 3000000000\n1 2 3000000000\n");
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "--format", "json", "path", "A", "C"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cost_overflow"));
}
