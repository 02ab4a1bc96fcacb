//! Tests on the built binary: exit codes and what lands on stdout/stderr.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_apply(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reversi-cli"))
        .arg("apply")
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The process may exit before reading stdin (bad arguments), so a broken pipe is fine.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn apply_writes_board() {
    let output = run_apply(&[], r#"{"move": {"column": 3, "row": 4, "player": 2}}"#);
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let board = response["board"].as_array().unwrap();
    assert_eq!(board.len(), 64);
    assert_eq!(board[26], 2);
    assert_eq!(board[27], 2);
}

#[test]
fn apply_at_location() {
    let output = run_apply(
        &["--at", "C5"],
        r#"{"move": {"column": 1, "row": 1, "player": 1}}"#,
    );
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["board"][34], 1);
    assert_eq!(response["board"][35], 1);
}

#[test]
fn not_json_fails_quietly_on_stdout() {
    let output = run_apply(&[], "this is not json");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Invalid board input. (Must be json)"));
}

#[test]
fn bad_request_fails_quietly_on_stdout() {
    for &input in [
        r#"{"board": [0, 0], "move": {"column": 1, "row": 1, "player": 1}}"#,
        r#"{"width": 3000000000, "height": 3000000000, "move": {"column": 1, "row": 1, "player": 1}}"#,
        r#"{"move": {"column": "three", "row": 1, "player": 1}}"#,
    ]
    .iter()
    {
        let output = run_apply(&[], input);
        assert_eq!(output.status.code(), Some(1), "{}", input);
        assert!(output.stdout.is_empty(), "{}", input);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid request: "));
    }
}

#[test]
fn bad_location_flag_is_rejected() {
    let output = run_apply(&["--at", "Z0"], "{}");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
