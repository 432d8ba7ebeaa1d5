//! End-to-end tests for the decomment binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn strip_all_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.js");
    fs::write(&input, "var a = 1; // gone\n/* also gone */var b = 2;\n").unwrap();

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--input").arg(&input);

    cmd.assert()
        .success()
        .stdout("var a = 1; \nvar b = 2;\n");
}

#[test]
fn strip_block_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.js");
    let output = dir.path().join("output.js");
    fs::write(&input, "// stays\n/* goes */var b = 2;\n").unwrap();

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--strip")
        .arg("block");

    cmd.assert().success().stdout(predicate::str::is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "// stays\nvar b = 2;\n"
    );
}

#[test]
fn safe_mode_keeps_protected_banners() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.js");
    fs::write(&input, "/*! banner */\n// gone\ncode();\n").unwrap();

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--input").arg(&input).arg("--safe");

    cmd.assert()
        .success()
        .stdout("/*! banner */\n\ncode();\n");
}

#[test]
fn token_json_format_dumps_the_scanner_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.js");
    fs::write(&input, "'s' // c\n").unwrap();

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--input")
        .arg(&input)
        .arg("--format")
        .arg("token-json");

    let output_pred = predicate::str::contains("QuotedString")
        .and(predicate::str::contains("LineComment"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--input").arg("no/such/file.js");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn unknown_strip_method_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.js");
    fs::write(&input, "code();\n").unwrap();

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--input").arg(&input).arg("--strip").arg("bogus");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown strip method"));
}
