use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const DIJKSTRA_INPUT: &str = "4\n0 1 4 99\n99 0 2 6\n99 99 0 3\n99 99 99 0\n0\n";
const UNDIRECTED_INPUT: &str = "4\n0 1 4 99\n1 0 2 6\n4 2 0 3\n99 6 3 0\n";

#[test]
fn test_binary_help() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("--help").assert().success();
}

#[test]
fn test_binary_dijkstra() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("dijkstra")
        .write_stdin(DIJKSTRA_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 -> 3 = 6"))
        .stdout(predicate::str::contains("0 -> 1 -> 2 = 3"));
}

#[test]
fn test_binary_dijkstra_unreachable() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("dijkstra")
        .write_stdin("2\n0 99\n99 0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 unreachable"));
}

#[test]
fn test_binary_prim() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("prim")
        .write_stdin(format!("{UNDIRECTED_INPUT}0\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Edge\tWeight"))
        .stdout(predicate::str::contains("2 - 3\t3"))
        .stdout(predicate::str::contains("Total weight = 6"));
}

#[test]
fn test_binary_kruskal() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("kruskal")
        .write_stdin(UNDIRECTED_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("(0,1) = 1"))
        .stdout(predicate::str::contains("The cost of minimum spanning tree = 6"));
}

#[test]
fn test_binary_custom_sentinel() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.args(["dijkstra", "--no-edge", "0"])
        .write_stdin("3\n0 7 0\n7 0 2\n0 2 0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 = 9"));
}

#[test]
fn test_binary_rejects_bad_source() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("dijkstra")
        .write_stdin("1\n0\n5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("source vertex 5 is out of range"));
}

#[test]
fn test_binary_rejects_truncated_input() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("prim")
        .write_stdin("2\n0 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing matrix entry (1, 0)"));
}

#[test]
fn test_binary_negative_sentinel() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.args(["dijkstra", "--no-edge=-1"])
        .write_stdin("3\n0 4 -1\n4 0 2\n-1 2 0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 = 6"));
}

#[test]
fn test_binary_huge_vertex_count_fails_cleanly() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.arg("dijkstra")
        .write_stdin("18446744073709551615\n0\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing matrix entry (0, 1)"));
}

#[test]
fn test_binary_missing_input_file() {
    let mut cmd = cargo_bin_cmd!("relax");
    cmd.args(["kruskal", "--input", "/nonexistent/relax/matrix.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read /nonexistent/relax/matrix.txt"))
        .stderr(predicate::str::contains("input error").not());
}
