//! Smoke tests for the `reportkit-monthly` binary.

mod common;

use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

use common::{path_in, read_report, text_at, write_month_export, write_workbook_with_sheets};

fn cmd() -> Command {
    Command::cargo_bin("reportkit-monthly").unwrap()
}

#[test]
fn test_no_args_prints_usage() {
    let assert = cmd().assert().failure().code(2);
    let c_stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(c_stderr.contains("Usage"), "stderr: {c_stderr}");
}

#[test]
fn test_missing_destination_touches_nothing() {
    let dir = tempdir().unwrap();
    let path_src = path_in(dir.path(), "export.xlsx");
    write_month_export(&path_src, "Мар25");

    cmd().arg(&path_src).assert().failure().code(2);

    let l_entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(l_entries.len(), 1);
}

#[test]
fn test_converts_and_prints_outcome() {
    let dir = tempdir().unwrap();
    let path_src = path_in(dir.path(), "export.xlsx");
    let path_dst = path_in(dir.path(), "report.xlsx");
    write_month_export(&path_src, "Мар25");

    let assert = cmd()
        .arg(&path_src)
        .arg(&path_dst)
        .env("REPORTKIT_LOG", "off")
        .assert()
        .success();

    let c_stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(c_stdout.starts_with("[REPORT] sheet=Мар25"), "stdout: {c_stdout}");
    assert!(c_stdout.contains("views=38025"), "stdout: {c_stdout}");

    let (l_names, range) = read_report(&path_dst);
    assert_eq!(l_names, vec!["Март 2025".to_string()]);
    assert_eq!(text_at(&range, 1, 2), "01.03.2025");
}

#[test]
fn test_missing_month_sheet_fails_with_message() {
    let dir = tempdir().unwrap();
    let path_src = path_in(dir.path(), "export.xlsx");
    let path_dst = path_in(dir.path(), "report.xlsx");
    write_workbook_with_sheets(&path_src, &["Лист1"]);

    let assert = cmd().arg(&path_src).arg(&path_dst).assert().failure();

    let c_stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        c_stderr.contains("Month data sheet not found. Available sheets: Лист1"),
        "stderr: {c_stderr}"
    );
    assert!(!path_dst.exists());
}
