//! # UI Tests for Checking and Highlighting
#![cfg(not(miri))]

use assert_cmd::Command;
use indoc::indoc;

#[test]
fn valid_source_has_no_output() {
  let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
    .unwrap()
    .args(["check", "-"])
    .write_stdin("set x to 5\n")
    .output()
    .unwrap();

  assert!(output.status.success());
  assert!(output.stdout.is_empty());
  assert!(output.stderr.is_empty());
}

#[test]
fn errors_are_reported_with_code_frames() {
  let source = indoc! {"
    tell me
      set x to
  "};

  let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
    .unwrap()
    .args(["check", "-"])
    .write_stdin(source)
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());

  let stderr = String::from_utf8(output.stderr).unwrap();
  let expected = indoc! {"
    ✕ Error: Expected Expression
    expected expression but got end of line

        ╭─[STDIN:2]
      2 │   set x to
    ────╯
    ✕ Error: Missing End
    the tell block is never closed
    hint: add `end tell` after the block

        ╭─[STDIN:1]
      1 │ tell me
    ────╯
  "};
  assert_eq!(stderr, expected);
}

#[test]
fn missing_file() {
  let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
    .unwrap()
    .args(["check", "does_not_exist.applescript"])
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(2));
  assert!(output.stdout.is_empty());

  let stderr = String::from_utf8(output.stderr).unwrap();
  assert_eq!(stderr, "✕ Error: File not found `does_not_exist.applescript`\n\n");
}

#[test]
fn highlight_without_colour_is_unchanged() {
  let source = indoc! {r#"
    -- greet someone
    on greet(name)
      display dialog "Hello " & name
    end greet
  "#};

  let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
    .unwrap()
    .args(["highlight", "--color", "never", "-"])
    .write_stdin(source)
    .output()
    .unwrap();

  assert!(output.status.success());
  assert!(output.stderr.is_empty());
  assert_eq!(String::from_utf8(output.stdout).unwrap(), source);
}

#[test]
fn highlight_with_colour() {
  let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
    .unwrap()
    .args(["--color", "always", "highlight", "-"])
    .write_stdin("set x to \"a\"")
    .output()
    .unwrap();

  assert!(output.status.success());

  let stdout = String::from_utf8(output.stdout).unwrap();
  assert!(stdout.contains('\u{1b}'));
  assert!(stdout.contains("\"a\""));
}
