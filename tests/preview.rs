mod common;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestWorkspace, fixture_path};
use predicates::prelude::*;

#[test]
fn preview_writes_normalized_rows_as_csv() {
    let workspace = TestWorkspace::new();
    let output = workspace.path().join("rows.csv");
    cargo_bin_cmd!("catalog-ingest")
        .args([
            "preview",
            "-i",
            fixture_path("vendor1.format1").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("read preview output");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "column_name,value");
    assert_eq!(lines[1], "first_name,John");
    assert_eq!(lines.len(), 5);
}

#[test]
fn preview_renders_table_to_stdout() {
    cargo_bin_cmd!("catalog-ingest")
        .args([
            "preview",
            "-i",
            fixture_path("vendor2.format2").to_str().unwrap(),
            "--table",
            "--limit",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("column"))
        .stdout(predicate::str::contains("trade_id"))
        .stdout(predicate::str::contains("T100"))
        .stdout(predicate::str::contains("settle_date").not());
}

#[test]
fn preview_honors_format_override_for_unrecognized_extension() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("feed.txt", "k=v\n");
    cargo_bin_cmd!("catalog-ingest")
        .args([
            "preview",
            "-i",
            input.to_str().unwrap(),
            "--format",
            "format1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("k,v"));
}

#[test]
fn preview_fails_on_malformed_format_one_line() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("broken.format1", "novalue\n");
    cargo_bin_cmd!("catalog-ingest")
        .args(["preview", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn preview_without_recognizable_format_is_an_error() {
    let workspace = TestWorkspace::new();
    let input = workspace.write("feed.txt", "k=v\n");
    cargo_bin_cmd!("catalog-ingest")
        .args(["preview", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}
