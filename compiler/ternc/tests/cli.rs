// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the `tern` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn tern() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tern"));
    cmd.env_remove("TERN_LOG").env("NO_COLOR", "1");
    cmd
}

fn script(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".tern").tempfile().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

fn run(args: &[&str], path: &Path) -> Output {
    tern().args(args).arg(path).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_prints_program_output() {
    let file = script("let greet = fn(name) { \"hi \" + name }\nprint greet(\"tern\"), 1 + 2\n");
    let output = run(&["run"], file.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "hi tern, 3\n");
}

#[test]
fn bare_script_path_runs() {
    let file = script("print \"direct\"");
    let output = tern().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "direct\n");
}

#[test]
fn runtime_error_reports_position() {
    let file = script("print \"before\"\nprint 1 + nil\nprint \"after\"\n");
    let output = run(&["run"], file.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "before\n");
    assert_eq!(
        stderr(&output),
        "error[E6002]: [2:7] illegal operation: 1 + nil\nerror: aborting due to 1 previous error\n"
    );
}

#[test]
fn static_errors_prevent_running() {
    let file = script("print \"never\"\nreturn 1\n");
    let output = run(&["run"], file.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("error[E2003]: [2:1]"));
}

#[test]
fn check_reports_without_running() {
    let good = script("print 1");
    let output = run(&["check"], good.path());
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("no errors found\n"));

    let bad = script("let = 1\nlet y = )\n");
    let output = run(&["check"], bad.path());
    assert_eq!(output.status.code(), Some(1));
    let errors = stderr(&output);
    assert!(errors.contains("error[E1001]: [1:5]"));
    assert!(errors.contains("error[E1002]: [2:9]"));
    assert!(errors.ends_with("aborting due to 2 previous errors\n"));
}

#[test]
fn parse_prints_canonical_form() {
    let file = script("let x = 1 + 2 * 3\nprint -x");
    let output = run(&["parse"], file.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "let x = (1 + (2 * 3));\nprint (-x);\n");
}

#[test]
fn lex_lists_tokens() {
    let file = script("let x = 1");
    let output = run(&["lex"], file.path());
    assert!(output.status.success());
    let listing = stdout(&output);
    let kinds: Vec<&str> = listing
        .lines()
        .map(|line| line.split(' ').next().unwrap())
        .collect();
    assert_eq!(kinds, vec!["Let", "Ident", "Assign", "Number", "Semicolon", "Eof"]);
}

#[test]
fn missing_file_is_reported() {
    let output = tern().args(["run", "no/such/file.tern"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: cannot find file 'no/such/file.tern'\n");
}

#[test]
fn usage_errors_exit_with_two() {
    let output = tern().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error: unknown command 'frobnicate'"));

    let output = tern().arg("run").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn repl_reads_stdin() {
    let mut child = tern()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"let x = 20\nx * 2 + 2\nprint x\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "> > 42\n> 20\n> \n");
}

#[test]
fn version_and_help() {
    let output = tern().arg("--version").output().unwrap();
    assert!(stdout(&output).starts_with("tern "));
    let output = tern().arg("help").output().unwrap();
    assert!(stdout(&output).contains("Usage: tern"));
}
