//! End-to-end tests for the `fusion` binary.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fusion(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fusion"))
        .args(args)
        .env_remove("FUSION_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn lex_prints_token_listing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.fu");
    fs::write(&path, "x >>= 1\n").unwrap();
    let path = path.to_str().unwrap();

    let output = fusion(&["lex", path, "--no-whitespace"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "Tokens for '{path}' (5 tokens):\n  \
             [name] \"x\" @ 1:0..1\n  \
             >> \">>\" @ 1:2..4\n  \
             '=' \"=\" @ 1:4..5\n  \
             [num] \"1\" @ 1:6..7\n  \
             [eof] \"\" @ 2:8..8\n"
        )
    );
}

#[test]
fn lex_error_exits_with_status_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.fu");
    fs::write(&path, "y = 0x\n").unwrap();

    let output = fusion(&["lex", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "));
    assert!(stderr(&output).contains("invalid numeric literal at line 1, byte 4"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_file_exits_with_status_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.fu");

    let output = fusion(&["lex", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn lex_without_path_is_a_usage_error() {
    let output = fusion(&["lex"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage: fusion lex"));
}

#[test]
fn unknown_command_is_rejected() {
    let output = fusion(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}

#[test]
fn version_reports_package_version() {
    let output = fusion(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("Fusion {}\n", env!("CARGO_PKG_VERSION"))
    );
}
