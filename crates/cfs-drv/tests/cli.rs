//! Integration tests driving the `cfs` binary end to end: representative
//! compilation scenarios plus the CLI's own usage-error surface.
//!
//! `assert_cmd` invokes the built binary, `predicates` checks its output,
//! `tempfile` supplies scratch input/output files.

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cfs() -> Command {
    Command::cargo_bin("cfs").unwrap()
}

fn write_source(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".cfs").unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn compiles_to_stdout() {
    let input = write_source("main() return 1 + 2 * 3");
    cfs()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("1 + 2 * 3\n"));
}

#[test]
fn compiles_ternary_conditional() {
    let input = write_source("main() return if(1 ? 5 : 7)");
    cfs()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("1 * (5 - 7) + 7\n"));
}

#[test]
fn compiles_exponent() {
    let input = write_source("main() return 2 ^ 3");
    cfs()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("exp(log(2) * 3)\n"));
}

#[test]
fn compiles_function_inlining() {
    let input = write_source("f(x) return x * x\nmain() return f(3 + 1)");
    cfs()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("(3 + 1) * (3 + 1)\n"));
}

#[test]
fn compiles_const_bindings() {
    let input = write_source("main() a = 2\nb = a + 1\nreturn a * b");
    cfs()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("2 * (2 + 1)\n"));
}

#[test]
fn writes_to_output_file_when_given() {
    let input = write_source("main() return 1 + 1");
    let output = NamedTempFile::new().unwrap();
    cfs()
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success();
    let contents = fs::read_to_string(output.path()).unwrap();
    assert_eq!(contents, "1 + 1\n");
}

#[test]
fn rejects_self_recursion_with_exit_code_one() {
    let input = write_source("main() return main() + 1");
    cfs()
        .arg(input.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("resolve error"));
}

#[test]
fn rejects_arity_mismatch_with_exit_code_one() {
    let input = write_source("g(x) return x\nmain() return g(1,2)");
    cfs()
        .arg(input.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("resolve error"));
}

#[test]
fn rejects_missing_main_with_exit_code_one() {
    let input = write_source("f() return 1");
    cfs()
        .arg(input.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("program error"));
}

#[test]
fn missing_input_file_is_a_usage_error() {
    cfs()
        .arg("/no/such/path.cfs")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage error"));
}

#[test]
fn missing_argument_is_a_clap_usage_error() {
    cfs().assert().failure().code(2);
}
