//! End-to-end runs of the `kgraph` binary: exit codes, stderr, stdin input.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const FAMILY: &str = "A -> B\nA -> C\nB -> D\nC -> E\nD -> E\n";

// ==================== Helpers ====================

fn family_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FAMILY.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn kgraph(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kgraph"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(mut pipe) = child.stdin.take() {
        // The child may exit on a usage error before reading stdin.
        if let Err(e) = pipe.write_all(stdin.as_bytes()) {
            assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe);
        }
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ==================== Success ====================

#[test]
fn test_siblings_from_file() {
    let file = family_file();
    let path = file.path().to_str().unwrap();
    let output = kgraph(&["siblings", path, "A"], "");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Siblings of \"A\":\n  D\n  E\n");
}

#[test]
fn test_query_from_stdin() {
    let output = kgraph(&["--format", "json", "query", "-", "cousin", "A"], FAMILY);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["relation"], "cousins");
    assert_eq!(value["results"], serde_json::json!(["E"]));
}

#[test]
fn test_info_from_stdin() {
    let output = kgraph(&["info", "-"], FAMILY);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Vertices: 5"));
    assert!(stdout(&output).contains("Edges: 5"));
}

// ==================== Runtime errors ====================

#[test]
fn test_show_missing_vertex_exits_1() {
    let file = family_file();
    let path = file.path().to_str().unwrap();
    let output = kgraph(&["show", path, "Z"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: Vertex \"Z\" not found"));
}

#[test]
fn test_malformed_stdin_exits_1() {
    let output = kgraph(&["info", "-"], "a b c\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Parse error on line 1"));
}

// ==================== Usage errors ====================

#[test]
fn test_unknown_format_is_usage_error() {
    let output = kgraph(&["--format", "yaml", "info", "-"], FAMILY);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("yaml"));
    assert!(err.contains("--format"));
}

#[test]
fn test_unknown_relation_is_usage_error() {
    let output = kgraph(&["query", "-", "aunts", "A"], FAMILY);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown relation \"aunts\""));
}
