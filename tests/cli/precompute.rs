use crate::support::{arcgraph, run_json, setup_abcd, setup_graph_dir};
use predicates::prelude::*;

#[test]
fn test_precompute_all_pairs() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .arg("precompute")
        .assert()
        .success()
        .stdout(
            "[A-B] [1]\nA(0)->B(1)\n\
             [A-C] [3]\nA(0)->B(1)->C(2)\n\
             [A-D] [4]\nA(0)->B(1)->C(2)->D(1)\n\
             [B-C] [2]\nB(0)->C(2)\n\
             [B-D] [3]\nB(0)->C(2)->D(1)\n\
             [C-D] [1]\nC(0)->D(1)\n\
             \n6 pairs, 6 reachable\n",
        );
}

#[test]
fn test_precompute_limit() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "precompute", "--limit", "2"])
        .assert()
        .success()
        .stdout("[A-B] [1]\nA(0)->B(1)\n");
}

#[test]
fn test_precompute_unreachable_pairs() {
    let dir = setup_graph_dir("A B C\n", "1 0 1\n");
    arcgraph()
        .current_dir(dir.path())
        .args(["precompute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[A-B] unreachable"))
        .stdout(predicate::str::contains("3 pairs, 0 reachable"));
}

#[test]
fn test_precompute_records() {
    let dir = setup_graph_dir("A B C\n", "0 1 4\n");
    arcgraph()
        .current_dir(dir.path())
        .args(["--format", "records", "precompute"])
        .assert()
        .success()
        .stdout(
            "P from=A to=B cost=4\nS A 0\nS B 4\n\
             P from=A to=C unreachable\n\
             P from=B to=C unreachable\n",
        );
}

#[test]
fn test_precompute_json() {
    let dir = setup_abcd();
    let json = run_json(&dir, &["precompute", "--limit", "3"]);
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["from"], 0);
    assert_eq!(entries[1]["to"], 2);
    assert_eq!(entries[1]["path"]["hops"][2][1], 2);
}

#[test]
fn test_precompute_limit_from_config() {
    let dir = setup_abcd();
    std::fs::write(
        dir.path().join("arcgraph.toml"),
        "[precompute]\nlimit = 2\n",
    )
    .unwrap();
    arcgraph()
        .current_dir(dir.path())
        .args(["--quiet", "precompute"])
        .assert()
        .success()
        .stdout("[A-B] [1]\nA(0)->B(1)\n");
}

#[test]
fn test_precompute_zero_limit_is_usage_error() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["precompute", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 1"));
}
