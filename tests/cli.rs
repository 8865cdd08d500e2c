use std::{fs, path::PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

const STAR: &str = "AAAAAB\nAABAAC\nAABAAD\n";

fn setup(graph: &str, nodes: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let graph_path = dir.path().join("graph.txt");
    let nodes_path = dir.path().join("nodes.txt");
    fs::write(&graph_path, graph).expect("write graph");
    fs::write(&nodes_path, nodes).expect("write nodes");
    (dir, graph_path, nodes_path)
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn star_report() {
    let (_dir, graph, nodes) = setup(STAR, "5\nAAA\nAAB\n");
    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(&nodes)
        .args(["--threads", "2"])
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        stdout_of(&output),
        "First 5 lexicographic paths from AAA:\n\
         AAAAABAAC\n\
         AAAAABAAD\n\
         Total maximal paths starting from AAA: 2\n\
         \n\
         First 5 lexicographic paths from AAB:\n\
         AABAAA\n\
         AABAAC\n\
         AABAAD\n\
         Total maximal paths starting from AAB: 3\n\
         \n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Execution completed in"));
}

#[test]
fn unknown_start_node_is_skipped() {
    let (_dir, graph, nodes) = setup(STAR, "1\nXYZ\nAAD\n");
    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(&nodes)
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        stdout_of(&output),
        "First 1 lexicographic paths from AAD:\nAADAABAAA\nTotal maximal paths starting from AAD: 2\n\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("XYZ"));
}

#[test]
fn missing_graph_file_fails() {
    let (dir, _graph, nodes) = setup(STAR, "1\nAAA\n");
    cargo_bin_cmd!("mpaths")
        .arg(dir.path().join("does-not-exist.txt"))
        .arg(&nodes)
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn missing_nodes_file_fails() {
    let (dir, graph, _nodes) = setup(STAR, "1\nAAA\n");
    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(dir.path().join("no-nodes.txt"))
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .get_output()
        .clone();
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-nodes.txt"));
}

#[test]
fn huge_frontier_factor_is_accepted() {
    let (_dir, graph, nodes) = setup(STAR, "0\nAAB\n");
    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(&nodes)
        .args(["--threads", "4", "--frontier-factor"])
        .arg(usize::MAX.to_string())
        .assert()
        .success()
        .get_output()
        .clone();
    assert!(stdout_of(&output).contains("Total maximal paths starting from AAB: 3\n"));
}

#[test]
fn malformed_budget_fails() {
    let (_dir, graph, nodes) = setup(STAR, "lots\nAAA\n");
    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(&nodes)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed input"));
}

#[test]
fn missing_arguments_is_usage_error() {
    cargo_bin_cmd!("mpaths").assert().failure().code(2);
}

#[test]
fn dump_stats_and_dot() {
    let (dir, graph, nodes) = setup("AAAAAB\nAABAAA\nCCCCCC\n", "2\nAAA\n");
    let dot = dir.path().join("graph.dot");
    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(&nodes)
        .arg("--stats")
        .arg("--dump-graph")
        .arg("--dot")
        .arg(&dot)
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("AAA: AAB\nAAB: AAA\nCCC:\n"));
    assert!(stdout.contains("Total maximal paths starting from AAA: 1\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3 nodes"));
    assert!(stderr.contains("1 self edges"));
    assert!(stderr.contains("1 duplicate edges"));

    let dot = fs::read_to_string(&dot).expect("dot file");
    assert!(dot.starts_with("graph {\n"));
    assert!(dot.contains("\"AAA\" -- \"AAB\";"));
    assert!(dot.contains("\"AAA\" [style=filled, color=red];"));
}

#[test]
fn generated_instance_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("rnd");
    cargo_bin_cmd!("mpaths-gen")
        .args(["12", "20", "3", "4"])
        .arg(&base)
        .args(["--seed", "17"])
        .assert()
        .success();

    let graph = dir.path().join("rnd-graph.txt");
    let nodes = dir.path().join("rnd-nodes.txt");
    let graph_text = fs::read_to_string(&graph).expect("graph file");
    assert_eq!(graph_text.lines().count(), 20);
    assert!(graph_text.lines().all(|l| l.len() == 6));

    let nodes_text = fs::read_to_string(&nodes).expect("nodes file");
    let mut lines = nodes_text.lines();
    assert_eq!(lines.next(), Some("3"));
    assert_eq!(lines.count(), 4);

    let output = cargo_bin_cmd!("mpaths")
        .arg(&graph)
        .arg(&nodes)
        .assert()
        .success()
        .get_output()
        .clone();
    let reported = stdout_of(&output).matches("Total maximal paths").count();
    let skipped = String::from_utf8_lossy(&output.stderr).matches("Error:").count();
    assert_eq!(reported + skipped, 4);
}

#[test]
fn generator_rejects_too_many_starts() {
    let dir = tempfile::tempdir().expect("tempdir");
    cargo_bin_cmd!("mpaths-gen")
        .args(["3", "2", "1", "4"])
        .arg(dir.path().join("rnd"))
        .assert()
        .failure()
        .code(1);
    assert!(!dir.path().join("rnd-graph.txt").exists());
}
