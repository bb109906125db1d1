#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use super::*;

fn source_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.vx");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn token_listing() {
    let buf = SourceBuffer::new("val x = 0x1F\n");
    let mut out = Vec::new();
    write_tokens(&buf, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<Vec<&str>> = text.lines().map(|l| l.split_whitespace().collect()).collect();
    assert_eq!(
        lines,
        [
            vec!["identifier", "0..3", "\"val\""],
            vec!["identifier", "4..5", "\"x\""],
            vec!["symbol", "6..7", "\"=\""],
            vec!["hex", "number", "8..12", "\"0x1F\""],
            vec!["symbol", "12..13", "\"\\n\""],
        ]
    );
}

#[test]
fn outline_indents_by_depth() {
    let buf = SourceBuffer::new("val x = 1");
    let ast = vx_parse::parse(&buf).into_result().unwrap();
    let mut out = Vec::new();
    write_outline(&ast, buf.as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
Statements
  Statement
    Declaration
      PublicityPrivate
      VariableDeclaration \"val\" 0..3
        Type
          Identifier \"x\" 4..5
        Expression
          DecimalNumber \"1\" 8..9
"
    );
}

#[test]
fn outline_of_empty_program() {
    let buf = SourceBuffer::new("");
    let ast = vx_parse::parse(&buf).into_result().unwrap();
    let mut out = Vec::new();
    write_outline(&ast, buf.as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Statements\n");
}

#[test]
fn check_accepts_valid_file() {
    let (_dir, path) = source_file("def main() {\n    val x = 1\n}\n");
    assert!(check_file(&path).unwrap());
}

#[test]
fn check_rejects_invalid_file() {
    let (_dir, path) = source_file("def main( {\n}\n");
    assert!(!check_file(&path).unwrap());
}

#[test]
fn parse_and_lex_report_status() {
    let (_dir, path) = source_file("x = 1\n");
    assert!(parse_file(&path, false).unwrap());
    assert!(lex_file(&path).unwrap());

    let (_dir, path) = source_file("x = \n");
    assert!(!parse_file(&path, true).unwrap());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = check_file(&dir.path().join("nope.vx"));
    assert!(matches!(result, Err(CliError::Read { .. })));
}
