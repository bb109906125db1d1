//! End-to-end runs of the `vx` binary.

#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn vx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vx"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, content: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn check_success_is_silent() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "ok.vx", b"public def main() {\n    return 0\n}\n");
    let output = vx(&["check", &path]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn check_failure_prints_diagnostic() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "bad.vx", b"def foo( { }\n");
    let output = vx(&["check", &path]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: expected identifier, found `{`\n"));
    assert!(stderr.contains(&format!("{path}:1:10")));
}

#[test]
fn parse_prints_outline() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "expr.vx", b"x = 1 + 2\n");
    let output = vx(&["parse", &path]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Statements\n  Statement\n    Expression\n      Assignment \"=\" 2..3\n"));
}

#[test]
fn lex_lists_tokens() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "lex.vx", b"a+b");
    let output = vx(&["lex", &path]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
}

#[test]
fn null_bytes_warn_but_parse() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "nul.vx", b"a \0= 1\n");
    let output = vx(&["check", &path]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(":1:3: null byte ignored"));
}

#[test]
fn missing_file_fails_with_cause() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.vx");
    let output = vx(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: cannot read"));
    assert!(stderr.contains("caused by:"));
}

#[test]
fn usage_errors() {
    assert_eq!(vx(&["check"]).status.code(), Some(1));
    assert_eq!(vx(&["frobnicate"]).status.code(), Some(1));
    assert!(vx(&["help"]).status.success());
    assert!(vx(&[]).status.success());
}
