//! End-to-end tests for the ckpt binary
//!
//! Each test gets its own temporary checkpoint root and runs the built
//! binary against it via `--root`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Find the ckpt binary relative to the test executable
fn ckpt_binary() -> PathBuf {
    let mut path = std::env::current_exe().expect("Failed to get current exe path");
    path.pop(); // test binary name
    path.pop(); // deps/

    let debug_bin = path.join("ckpt");
    if debug_bin.exists() {
        return debug_bin;
    }

    path.pop();
    let release_bin = path.join("release").join("ckpt");
    if release_bin.exists() {
        return release_bin;
    }

    path.join("debug").join("ckpt")
}

fn ckpt(root: &Path, args: &[&str]) -> Output {
    Command::new(ckpt_binary())
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .expect("Failed to execute ckpt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed:\nstdout: {}\nstderr: {}",
        stdout(output),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn new_allocates_sequential_names() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");

    let first = ckpt(&root, &["new", "a"]);
    assert_success(&first);
    assert!(stdout(&first).trim().ends_with("001_a"));

    let second = ckpt(&root, &["new", "b"]);
    assert_success(&second);
    assert!(stdout(&second).trim().ends_with("002_b"));
}

#[test]
fn path_resolves_id_and_description() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    assert_success(&ckpt(&root, &["new", "baseline"]));

    let by_id = ckpt(&root, &["path", "1"]);
    assert_success(&by_id);
    assert!(stdout(&by_id).trim().ends_with("001_baseline"));

    let by_desc = ckpt(&root, &["path", "baseline"]);
    assert_success(&by_desc);
    assert!(stdout(&by_desc).trim().ends_with("001_baseline"));

    let missing = ckpt(&root, &["path", "42"]);
    assert!(!missing.status.success());
}

#[test]
fn last_prints_max_id_path() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    assert_success(&ckpt(&root, &["new", "a"]));
    assert_success(&ckpt(&root, &["new", "b"]));

    let last = ckpt(&root, &["last"]);
    assert_success(&last);
    assert!(stdout(&last).trim().ends_with("002_b"));
}

#[test]
fn last_fails_on_empty_root() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    let last = ckpt(&root, &["last"]);
    assert!(!last.status.success());
}

#[test]
fn rm_is_lenient_unless_strict() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    assert_success(&ckpt(&root, &["new", "a"]));

    assert_success(&ckpt(&root, &["rm", "9"]));
    assert!(!ckpt(&root, &["rm", "9", "--strict"]).status.success());

    assert_success(&ckpt(&root, &["rm", "1"]));
    assert!(!ckpt(&root, &["path", "1"]).status.success());
}

#[test]
fn rm_until_leaves_cutoff_and_above() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    for name in ["a", "b", "c", "d"] {
        assert_success(&ckpt(&root, &["new", name]));
    }

    assert_success(&ckpt(&root, &["rm-until", "3"]));
    assert!(!ckpt(&root, &["path", "1"]).status.success());
    assert!(!ckpt(&root, &["path", "2"]).status.success());
    assert_success(&ckpt(&root, &["path", "3"]));
    assert_success(&ckpt(&root, &["path", "4"]));
}

#[test]
fn prune_removes_empty_but_keeps_latest() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    // both are empty; the latest must survive
    assert_success(&ckpt(&root, &["new", "a"]));
    assert_success(&ckpt(&root, &["new", "b"]));

    let pruned = ckpt(&root, &["prune"]);
    assert_success(&pruned);
    assert!(stdout(&pruned).contains("001_a"));

    assert!(!ckpt(&root, &["path", "1"]).status.success());
    assert_success(&ckpt(&root, &["path", "2"]));
}

#[test]
fn status_reports_empty_and_populated_roots() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");

    let empty = ckpt(&root, &["status"]);
    assert_success(&empty);
    assert!(stdout(&empty).contains("No checkpoints yet"));

    assert_success(&ckpt(&root, &["new", "a"]));
    let populated = ckpt(&root, &["status"]);
    assert_success(&populated);
    assert!(stdout(&populated).contains("Checkpoints: 1"));
}

#[test]
fn log_file_mirrors_command_activity() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("checkpoints");
    let log_path = tmp.path().join("ckpt.log");

    let output = Command::new(ckpt_binary())
        .arg("--root")
        .arg(&root)
        .arg("--log-file")
        .arg(&log_path)
        .args(["new", "a"])
        .output()
        .expect("Failed to execute ckpt");
    assert!(output.status.success());

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("created"));
    assert!(log.contains("001_a"));
}
