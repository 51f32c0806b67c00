//! Command-line tests for the `gstinv` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE: &str = "Invoice No: INV-001\nDate: 15/03/2024\nGSTIN: 29ABCDE1234F1Z5\nAcme Corp\nConsulting Service 5000.00\nTotal: Rs. 5900.00";

fn gstinv() -> Command {
    Command::cargo_bin("gstinv").unwrap()
}

/// A workspace with a config file pointing exports into the temp dir.
fn workspace() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "export": { "export_dir": dir.path().join("exports") }
    });
    fs::write(&config_path, config.to_string()).unwrap();
    let config_arg = config_path.to_str().unwrap().to_string();
    (dir, config_arg)
}

#[test]
fn process_file_as_json() {
    let (dir, config) = workspace();
    let input = dir.path().join("sample.txt");
    fs::write(&input, SAMPLE).unwrap();

    let output = gstinv()
        .args(["-c", &config, "process"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["filename"], "sample.txt");
    assert_eq!(value["invoice_data"]["invoice_number"], "INV-001");
    assert_eq!(value["invoice_data"]["invoice_date"], "2024-03-15");
    assert_eq!(value["invoice_data"]["vendor_name"], "Acme Corp");
    assert_eq!(value["tax_data"]["line_items_with_tax"][0]["category"], "services");
    assert_eq!(value["tax_data"]["validation"]["match_threshold"], true);
}

#[test]
fn process_stdin_as_report() {
    let (_dir, config) = workspace();

    gstinv()
        .args(["-c", &config, "process", "-", "-f", "report"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== TAX PREDICTION REPORT ==="))
        .stdout(predicate::str::contains("Predicted Total: ₹5900.00"));
}

#[test]
fn process_rejects_short_text() {
    let (_dir, config) = workspace();

    gstinv()
        .args(["-c", &config, "process", "-"])
        .write_stdin("  hi  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient text"));
}

#[test]
fn process_missing_input() {
    gstinv()
        .args(["process", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_validate_reports_issues() {
    let (_dir, config) = workspace();

    gstinv()
        .args(["-c", &config, "process", "-", "-f", "text", "--validate"])
        .write_stdin("Widget 500.00\nGadget 250.00")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invoice number not found"))
        .stdout(predicate::str::contains("Widget"));
}

#[test]
fn process_save_writes_export() {
    let (dir, config) = workspace();
    let output = dir.path().join("out.csv");

    gstinv()
        .args(["-c", &config, "process", "-", "-f", "csv", "--save", "-o"])
        .arg(&output)
        .write_stdin(SAMPLE)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("Invoice Summary"));

    let exports: Vec<_> = fs::read_dir(dir.path().join("exports"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(exports.len(), 1);
    assert!(exports[0].starts_with("invoice_export_"));
    assert!(exports[0].ends_with(".csv"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let (dir, config) = workspace();
    let inputs = dir.path().join("inputs");
    let outputs = dir.path().join("outputs");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("a.txt"), SAMPLE).unwrap();
    fs::write(inputs.join("b.txt"), SAMPLE.replace("INV-001", "INV-002")).unwrap();
    fs::write(inputs.join("short.txt"), "tiny").unwrap();
    fs::write(inputs.join("ignored.md"), SAMPLE).unwrap();

    let pattern = format!("{}/*", inputs.display());
    gstinv()
        .args(["-c", &config, "batch", &pattern, "-j", "2", "--summary", "--continue-on-error", "-o"])
        .arg(&outputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 files"))
        .stdout(predicate::str::contains("short.txt"));

    assert!(outputs.join("a.json").exists());
    assert!(outputs.join("b.json").exists());
    assert!(!outputs.join("short.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("a.txt,success,INV-001,2024-03-15,Acme Corp,29ABCDE1234F1Z5,5900.00,5900.00,true,"));
    assert!(lines[2].starts_with("b.txt,success,INV-002,"));
    assert!(lines[3].starts_with("short.txt,error,"));
}

#[test]
fn batch_stops_on_first_error() {
    let (dir, config) = workspace();
    fs::write(dir.path().join("short.txt"), "tiny").unwrap();

    let pattern = format!("{}/*.txt", dir.path().display());
    gstinv()
        .args(["-c", &config, "batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn category_check_and_update() {
    gstinv()
        .args(["category", "check", "Premium medicine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exempt (0%)"));

    gstinv()
        .args(["category", "update", "Widget", "services"])
        .assert()
        .success();

    gstinv()
        .args(["category", "update", "Widget", "zero-rated"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    gstinv()
        .args(["category", "update", "Widget", "Services"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn exports_clean_keeps_recent_files() {
    let (dir, config) = workspace();
    let exports = dir.path().join("exports");

    gstinv()
        .args(["-c", &config, "exports", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 export(s)"));

    fs::create_dir_all(&exports).unwrap();
    fs::write(exports.join("invoice_export_20240315_090507.json"), "{}").unwrap();

    gstinv()
        .args(["-c", &config, "exports", "clean", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 export(s)"));
    assert!(exports.join("invoice_export_20240315_090507.json").exists());
}

#[test]
fn config_init_set_get() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let path_arg = path.to_str().unwrap();

    gstinv()
        .args(["-c", path_arg, "config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    gstinv()
        .args(["-c", path_arg, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    gstinv()
        .args(["-c", path_arg, "config", "set", "extraction.max_line_items", "5"])
        .assert()
        .success();

    gstinv()
        .args(["-c", path_arg, "config", "get", "extraction.max_line_items"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));

    gstinv()
        .args(["-c", path_arg, "config", "set", "extraction.no_such_key", "1"])
        .assert()
        .failure();
}
