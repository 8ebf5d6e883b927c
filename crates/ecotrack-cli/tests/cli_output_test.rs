//! Integration tests for the ecotrack binary
//!
//! Each test runs the built binary against its own temporary data directory
//! and checks the JSON envelope printed on stdout.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn ecotrack(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ecotrack"))
        .arg("--json")
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("ECOTRACK_DATA_DIR")
        .env_remove("ECOTRACK_HISTORY_CAPACITY")
        .env_remove("ECOTRACK_LATITUDE")
        .env_remove("ECOTRACK_LONGITUDE")
        .output()
        .expect("Failed to execute command")
}

fn json_data(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(parsed["status"], "success");
    parsed["data"].clone()
}

#[test]
fn test_classify_outputs_tier() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(dir.path(), &["classify", "42"]);
    assert!(output.status.success());

    let data = json_data(&output);
    assert_eq!(data["tier"], "good");
    assert_eq!(data["label"], "Good");
}

#[test]
fn test_classify_rejects_negative_value() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(dir.path(), &["classify", "-5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_estimate_defaults() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(dir.path(), &["estimate"]);
    assert!(output.status.success());

    let data = json_data(&output);
    let total = data["estimate"]["total"].as_f64().unwrap();
    assert!((total - 7.868).abs() < 1e-9);
    assert_eq!(data["estimate"]["dominant"], "diet");
    assert_eq!(data["input"]["diet"], "medium");
    assert!(data["saved_id"].is_null());

    // Estimating never writes history unless asked, even when none exists
    let history = json_data(&ecotrack(dir.path(), &["history"]));
    assert_eq!(history["total_entries"], 0);
}

#[test]
fn test_estimate_rejects_negative_input() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(dir.path(), &["estimate", "--car-km=-10"]);
    assert!(!output.status.success());
}

#[test]
fn test_overflowing_estimate_keeps_saved_history() {
    let dir = TempDir::new().unwrap();
    for _ in 0..3 {
        assert!(ecotrack(dir.path(), &["estimate", "--save"]).status.success());
    }

    let output = ecotrack(dir.path(), &["estimate", "--electricity-kwh", "1e308", "--save"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("electricityKwhPerMonth"));

    assert!(ecotrack(dir.path(), &["estimate", "--save"]).status.success());
    let history = json_data(&ecotrack(dir.path(), &["history"]));
    assert_eq!(history["total_entries"], 4);
}

#[test]
fn test_save_then_history_and_migrate() {
    let dir = TempDir::new().unwrap();

    let saved = ecotrack(dir.path(), &["estimate", "--diet", "vegan", "--save"]);
    assert!(saved.status.success());
    assert!(json_data(&saved)["saved_id"].is_string());

    let history = json_data(&ecotrack(dir.path(), &["history"]));
    assert_eq!(history["total_entries"], 1);
    assert_eq!(history["capacity"], 50);
    assert_eq!(history["entries"][0]["inputs"]["diet"], "vegan");

    let empty = json_data(&ecotrack(dir.path(), &["progress"]));
    assert_eq!(empty["records"], 0);
    assert!(empty["stats"].is_null());

    let migrated = json_data(&ecotrack(dir.path(), &["migrate"]));
    assert_eq!(migrated["migrated"], 1);

    let again = json_data(&ecotrack(dir.path(), &["migrate"]));
    assert_eq!(again["migrated"], 0);
    assert_eq!(again["skipped"], 1);

    let progress = json_data(&ecotrack(dir.path(), &["progress"]));
    assert_eq!(progress["records"], 1);
    assert_eq!(progress["stats"]["change_pct"], 0.0);
    assert!(progress["trend"].as_array().unwrap().is_empty());
}

#[test]
fn test_cities_summary() {
    let dir = TempDir::new().unwrap();
    let data = json_data(&ecotrack(dir.path(), &["cities", "--top", "3"]));

    assert_eq!(data["city_count"], 25);
    assert_eq!(data["total_emissions"], 373_500_000.0);
    let top = data["top"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["name"], "Delhi");
}

#[test]
fn test_unknown_city_fails() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(dir.path(), &["cities", "--city", "Atlantis"]);
    assert!(!output.status.success());
}

#[test]
fn test_aqi_without_location_fails() {
    let dir = TempDir::new().unwrap();
    let output = ecotrack(dir.path(), &["aqi"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Location is not available"));
}

#[test]
fn test_config_reports_sources() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "history_capacity = 5\n").unwrap();

    let data = json_data(&ecotrack(dir.path(), &["config"]));
    assert_eq!(data["values"]["history_capacity"]["value"], "5");
    assert_eq!(data["values"]["history_capacity"]["source"], "File");
    assert_eq!(data["values"]["data_dir"]["source"], "Cli");
}
