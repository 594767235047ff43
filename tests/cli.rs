use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sumcat_cmd() -> Command {
    Command::cargo_bin("sumcat").expect("binary should build")
}

#[test]
fn cli_wrong_argument_count_shows_usage() {
    sumcat_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn cli_too_many_arguments_shows_usage() {
    sumcat_cmd()
        .args(["a", "b", "c"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn cli_writes_snapshot_and_confirms() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello world").unwrap();
    sumcat_cmd()
        .current_dir(dir.path())
        .args(["", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "File contents collected and saved to sum.txt",
        ));
    let text = fs::read_to_string(dir.path().join("sum.txt")).unwrap();
    assert!(text.contains("├── hello.txt"));
    assert!(text.contains("File: hello.txt\n\nhello world"));
}

#[test]
fn cli_excludes_and_filters() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "text body").unwrap();
    fs::write(dir.path().join("b.go"), "go body").unwrap();
    fs::create_dir(dir.path().join("skip")).unwrap();
    fs::write(dir.path().join("skip/c.go"), "pruned body").unwrap();
    sumcat_cmd()
        .current_dir(dir.path())
        .args(["skip", "go"])
        .assert()
        .success();
    let text = fs::read_to_string(dir.path().join("sum.txt")).unwrap();
    assert!(text.contains("File: b.go"));
    assert!(!text.contains("a.txt"));
    assert!(!text.contains("skip"));
    assert!(!text.contains("pruned body"));
}

#[test]
fn cli_help_exits_zero() {
    sumcat_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sumcat"));
}
