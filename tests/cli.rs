//! Tests for the command-line interface

use assert_cmd::Command;
use predicates::prelude::*;

fn fnplot() -> Command {
    Command::cargo_bin("fnplot").unwrap()
}

#[test]
fn test_print_writes_csv() {
    let output = fnplot()
        .args(["--print", "--function", "x+1", "--min", "1", "--max", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("x,y\n1,2\n"))
        .stdout(predicate::str::ends_with("4,5\n"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 101);
}

#[test]
fn test_print_accepts_negative_bounds() {
    fnplot()
        .args(["--print", "-f", "x^2", "--min", "-3", "--max", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("x,y\n-3,9\n"));
}

#[test]
fn test_print_reports_validation_errors() {
    fnplot()
        .args(["--print", "--min", "1", "--max", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Function textbox can't be empty!"));

    fnplot()
        .args(["--print", "--function", "y+1", "--min", "1", "--max", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Expression must contain exactly one variable and it must be x",
        ));
}

#[test]
fn test_undefined_policy_flag() {
    fnplot()
        .args(["--print", "-f", "1/(x-1)", "--min", "1", "--max", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n1,NaN\n"));

    fnplot()
        .args(["--print", "-f", "1/(x-1)", "--min", "1", "--max", "2"])
        .args(["--on-undefined", "abort"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not evaluate function at x = 1: division by zero",
        ));

    fnplot()
        .args(["--print", "--on-undefined", "skip"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown policy"));
}

#[test]
fn test_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("fnplot.log");

    fnplot()
        .args(["--print", "-f", "2x", "--min", "0", "--max", "10", "--log"])
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting fnplot"));
    assert!(contents.contains("Sampling function"));
}

#[test]
fn test_print_rejects_out_of_range_and_deeply_nested_input() {
    fnplot()
        .args(["--print", "-f", "x", "--min", "1000000000000000"])
        .args(["--max", "1000000000000001"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Minimum value of x must be a whole number",
        ));

    let nested = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
    fnplot()
        .args(["--print", "--min", "1", "--max", "4", "-f"])
        .arg(&nested)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid expression for function!"));
}
