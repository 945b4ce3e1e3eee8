use crate::support::{arcgraph, run_json, setup_abcd, setup_graph_dir};
use predicates::prelude::*;

#[test]
fn test_dfs_visit_order() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["dfs", "A"])
        .assert()
        .success()
        .stdout("Visiting: A\nVisiting: B\nVisiting: C\nVisiting: D\n");
}

#[test]
fn test_dfs_accepts_handle() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["dfs", "2"])
        .assert()
        .success()
        .stdout("Visiting: C\nVisiting: D\n");
}

#[test]
fn test_bfs_visit_order() {
    // A reaches B and C directly, D only through C
    let dir = setup_graph_dir("A B C D\n", "0 2 1\n0 1 1\n2 3 1\n");
    arcgraph()
        .current_dir(dir.path())
        .args(["bfs", "A"])
        .assert()
        .success()
        .stdout("Visiting: A\nVisiting: C\nVisiting: B\nVisiting: D\n");
}

#[test]
fn test_bfs_records_format() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--format", "records", "bfs", "C"])
        .assert()
        .success()
        .stdout("V 2 C\nV 3 D\n");
}

#[test]
fn test_bfs_json() {
    let dir = setup_abcd();
    let json = run_json(&dir, &["bfs", "A"]);
    let visited = json["visited"].as_array().unwrap();
    assert_eq!(visited.len(), 4);
    assert_eq!(visited[0]["label"], "A");
    assert_eq!(visited[3]["handle"], 3);
}

#[test]
fn test_bfs_to_trackback() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["bfs-to", "A", "D"])
        .assert()
        .success()
        .stdout(
            "Visiting: A\nVisiting: B\nVisiting: C\n\
             Trackback: D\nTrackback: C\nTrackback: A\n",
        );
}

#[test]
fn test_bfs_to_quiet_prints_only_trackback() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "bfs-to", "A", "D"])
        .assert()
        .success()
        .stdout("Trackback: D\nTrackback: C\nTrackback: A\n");
}

#[test]
fn test_bfs_to_json() {
    let dir = setup_abcd();
    let json = run_json(&dir, &["bfs-to", "A", "D"]);
    assert_eq!(json["found"], true);
    let trackback: Vec<&str> = json["trackback"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["label"].as_str().unwrap())
        .collect();
    assert_eq!(trackback, vec!["D", "C", "A"]);
}

#[test]
fn test_bfs_to_unreachable_exit_code_3() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["bfs-to", "D", "A"])
        .assert()
        .code(3)
        .stdout("Visiting: D\n")
        .stderr(predicate::str::contains("not reachable"));
}

#[test]
fn test_dual_flag_makes_arcs_symmetric() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--dual", "--quiet", "bfs-to", "D", "A"])
        .assert()
        .success()
        .stdout("Trackback: A\nTrackback: C\nTrackback: D\n");
}
