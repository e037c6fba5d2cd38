use assert_cmd::Command;
use predicates::prelude::*;

fn novideo() -> Command {
    Command::cargo_bin("novideo").unwrap()
}

#[test]
fn shows_help() {
    novideo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("song library"));
}

#[test]
fn shows_version() {
    novideo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag() {
    novideo()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flags() {
    novideo()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn invalid_path_fails() {
    novideo()
        .args(["--force", "--path", "/nonexistent/songs/12345"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("The given path is invalid."));
}

#[test]
fn path_to_a_file_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    novideo()
        .args(["--force", "-p"])
        .arg(&file)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("The given path is invalid."));
}

#[test]
fn generates_shell_completions() {
    novideo()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("novideo"));
}
