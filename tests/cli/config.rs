use crate::support::{arcgraph, setup_abcd, ARCS, NODES};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_file_selects_record_files_and_mode() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cities.txt"), NODES).unwrap();
    fs::write(dir.path().join("roads.txt"), ARCS).unwrap();
    fs::write(
        dir.path().join("arcgraph.toml"),
        "nodes = \"cities.txt\"\narcs = \"roads.txt\"\nmode = \"dual\"\n",
    )
    .unwrap();

    arcgraph()
        .current_dir(dir.path())
        .args(["--format", "records", "info"])
        .assert()
        .success()
        .stdout("G nodes=4 arcs=8 capacity=4 mode=dual\n");
}

#[test]
fn test_flags_override_config_file() {
    let dir = setup_abcd();
    fs::write(
        dir.path().join("arcgraph.toml"),
        "nodes = \"missing.txt\"\ncapacity = 9\n",
    )
    .unwrap();

    arcgraph()
        .current_dir(dir.path())
        .args(["--nodes", "nodes.txt", "--capacity", "5", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capacity: 5"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = setup_abcd();
    arcgraph()
        .current_dir(dir.path())
        .args(["--config", "nope.toml", "info"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_invalid_config_mode() {
    let dir = setup_abcd();
    fs::write(dir.path().join("arcgraph.toml"), "mode = \"sideways\"\n").unwrap();

    arcgraph()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
