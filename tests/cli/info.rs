use crate::support::{arcgraph, run_json, setup_abcd};

#[test]
fn test_info_human() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout("Nodes: 4\nArcs: 4\nCapacity: 4\n");
}

#[test]
fn test_info_dual_and_capacity() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--dual", "--capacity", "6", "--format", "records", "info"])
        .assert()
        .success()
        .stdout("G nodes=4 arcs=8 capacity=6 mode=dual\n");
}

#[test]
fn test_info_json() {
    let dir = setup_abcd();
    let json = run_json(&dir, &["info"]);
    assert_eq!(json["nodes"], 4);
    assert_eq!(json["arcs"], 4);
    assert_eq!(json["mode"], "directed");
}

#[test]
fn test_capacity_below_node_count_is_usage_error() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--capacity", "2", "info"])
        .assert()
        .code(2);
}
