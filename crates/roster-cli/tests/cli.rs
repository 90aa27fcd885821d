//! End-to-end runs of the `roster` binary against a CSV on disk.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

const ROSTER_CSV: &str = "\
Full Name,City ,State,Phone #,E-mail
Ann Lee,NYC,NY,555-0100,ann@example.com
Bo Park,NYC,NY,,bo@example.com
Cy Diaz,LA,CA,555-0102,
Di Wu,LA,CA,,
Ed Fox,LA,CA,555-0104,
Fay Ng,SF,,555-0105,
";

fn roster(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run roster binary")
}

fn write_roster(dir: &Path) -> String {
    let path = dir.join("photographers.csv");
    std::fs::write(&path, ROSTER_CSV).unwrap();
    path.to_string_lossy().into_owned()
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn top_cities_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_roster(dir.path());
    let output = roster(&["--data", data.as_str(), "--format", "json", "top-cities"]);
    assert_eq!(
        json_stdout(&output),
        json!([
            {"City": "LA", "count": 3},
            {"City": "NYC", "count": 2},
            {"City": "SF", "count": 1}
        ])
    );
}

#[test]
fn summary_counts_missing_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_roster(dir.path());
    let output = roster(&["summary", "--data", data.as_str(), "--format", "json"]);
    let summary = json_stdout(&output);
    assert_eq!(summary["total_records"], 6);
    assert_eq!(summary["unique_states"], 2);
    assert_eq!(summary["phones_present"], 4);
    assert_eq!(summary["emails_missing"], 4);
    assert_eq!(summary["websites_present"], 0);
}

#[test]
fn predictions_honor_horizon_flag() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_roster(dir.path());
    let output = roster(&[
        "--data", data.as_str(), "--format", "json", "predictions", "--horizon", "2",
    ]);
    let forecast = json_stdout(&output);
    assert_eq!(
        forecast["predictions"],
        json!([
            {"future_index": 3, "predicted": 0.0},
            {"future_index": 4, "predicted": -1.0}
        ])
    );
}

#[test]
fn oversized_horizon_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_roster(dir.path());
    let output = roster(&[
        "--data",
        data.as_str(),
        "predictions",
        "--horizon",
        "18446744073709551615",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("maximum"));
}

#[test]
fn seeded_mock_series_repeat() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_roster(dir.path());
    let args = ["--data", data.as_str(), "--format", "json", "--seed", "7", "mock", "equipment"];
    let first = json_stdout(&roster(&args));
    let second = json_stdout(&roster(&args));
    assert_eq!(first, second);
    assert_eq!(first.as_array().map(Vec::len), Some(5));
}

#[test]
fn config_file_supplies_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_roster(dir.path());
    let config = dir.path().join("roster.toml");
    std::fs::write(&config, "dataset = \"photographers.csv\"\n").unwrap();
    let config = config.to_string_lossy().into_owned();

    let output = roster(&["--config", config.as_str(), "--format", "json", "geo"]);
    assert_eq!(
        json_stdout(&output),
        json!([
            {"state": "CA", "count": 3},
            {"state": "NY", "count": 2}
        ])
    );
}

#[test]
fn missing_dataset_fails_before_any_query() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.csv");
    let output = roster(&["--data", absent.to_str().unwrap(), "summary"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn unknown_role_is_rejected() {
    let output = roster(&["top", "--role", "studio"]);
    assert!(!output.status.success());
}
