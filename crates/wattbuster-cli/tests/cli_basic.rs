//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a scratch directory
//! so the store and config never touch the real user profile.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_wattbuster-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("WATTBUSTER_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

#[test]
fn test_catalog_list() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["catalog", "list"]);
    assert!(stdout.contains("youtube"));
    assert!(stdout.contains("videocalls"));
}

#[test]
fn test_catalog_list_json_by_category() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["catalog", "list", "--json"]);
    let all: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(all.as_array().unwrap().len(), 12);

    let stdout = run_cli_success(
        home.path(),
        &["catalog", "list", "--category", "audio", "--json"],
    );
    let audio: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<&str> = audio
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["music", "podcast"]);
}

#[test]
fn test_catalog_tip() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["catalog", "tip", "netflix"]);
    assert!(stdout.contains("200W/h"));

    let (_, _, code) = run_cli(home.path(), &["catalog", "tip", "fax"]);
    assert_ne!(code, 0);
}

#[test]
fn test_track_then_visualize_stored_energy() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["track", "youtube=2", "gaming=1", "--date", "2024-01-01"],
    );
    assert!(stdout.contains("600W"));

    let stdout = run_cli_success(home.path(), &["visualize", "battery"]);
    assert!(stdout.contains("Battery Draining"));
    assert!(stdout.contains("Total: 600W"));
}

#[test]
fn test_track_json_reports_streak() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["track", "email=2", "--date", "2024-01-01"]);
    let stdout = run_cli_success(
        home.path(),
        &["track", "music=1", "--date", "2024-01-02", "--json"],
    );

    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["record"]["total_energy"], 80.0);
    assert_eq!(summary["streak"], 2);
    assert_eq!(summary["progress"]["tier"], "efficient");
}

#[test]
fn test_track_rejects_bad_entries() {
    let home = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["track", "fax=1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown activity"));

    let (_, stderr, code) = run_cli(home.path(), &["track", "gaming=30"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Hours"));
}

#[test]
fn test_visualize_fallback_and_co2() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["visualize", "graph"]);
    assert!(stdout.contains("Total: 850W"));

    let stdout = run_cli_success(home.path(), &["visualize", "co2", "--energy", "1000"]);
    assert!(stdout.contains("500g"));
    assert!(stdout.contains("Reduction tips"));
}

#[test]
fn test_analyze_json() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("days.json");
    std::fs::write(
        &file,
        r#"[
            {"date": "2024-01-06", "entries": [{"activity": "gaming", "hours": 2}]},
            {"date": "2024-01-13", "entries": [{"activity": "gaming", "hours": 4}]}
        ]"#,
    )
    .unwrap();
    let path = file.to_str().unwrap();

    let stdout = run_cli_success(home.path(), &["analyze", path, "--period", "all", "--json"]);
    let dashboard: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(dashboard["days_tracked"], 2);
    assert_eq!(dashboard["total_energy"], 1800.0);
    assert_eq!(dashboard["trend"], "not_available");
    assert_eq!(dashboard["trend_series"].as_array().unwrap().len(), 2);

    let stdout = run_cli_success(home.path(), &["analyze", path]);
    assert!(stdout.contains("Weekly pattern"));
}

#[test]
fn test_theme_toggle() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(run_cli_success(home.path(), &["theme"]).trim(), "dark");
    assert_eq!(run_cli_success(home.path(), &["theme", "toggle"]).trim(), "light");
    assert_eq!(run_cli_success(home.path(), &["theme", "get"]).trim(), "light");
    run_cli_success(home.path(), &["theme", "set", "dark"]);
    assert_eq!(run_cli_success(home.path(), &["theme", "get"]).trim(), "dark");
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "goal.daily_watts"]).trim(),
        "500.0"
    );
    run_cli_success(home.path(), &["config", "set", "goal.daily_watts", "600"]);
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "goal.daily_watts"]).trim(),
        "600.0"
    );

    let (_, _, code) = run_cli(home.path(), &["config", "set", "goal.nope", "1"]);
    assert_ne!(code, 0);
}

#[test]
fn test_analyze_rejects_out_of_range_hours() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("days.json");
    std::fs::write(
        &file,
        r#"[
            {"date": "2024-01-01", "entries": [
                {"activity": "gaming", "hours": -3},
                {"activity": "email", "hours": 30}
            ]}
        ]"#,
    )
    .unwrap();

    let (stdout, stderr, code) = run_cli(home.path(), &["analyze", file.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("malformed"), "stderr: {stderr}");
    assert!(!stdout.contains("Activity breakdown"));
}

#[test]
fn test_analyze_skips_unknown_activity_ids() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("days.json");
    std::fs::write(
        &file,
        r#"[{"date": "2024-01-01", "entries": [
            {"activity": "fax", "hours": 2},
            {"activity": "email", "hours": 2}
        ]}]"#,
    )
    .unwrap();

    let stdout = run_cli_success(home.path(), &["analyze", file.to_str().unwrap(), "--json"]);
    let dashboard: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(dashboard["total_energy"], 100.0);
}

#[test]
fn test_malformed_store_counts_as_no_data() {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join(".config").join("wattbuster");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("store.json"), "{not json").unwrap();

    let stdout = run_cli_success(home.path(), &["visualize", "battery"]);
    assert!(stdout.contains("Total: 850W"));

    assert_eq!(run_cli_success(home.path(), &["theme"]).trim(), "dark");

    // the next write replaces the broken file
    run_cli_success(home.path(), &["theme", "set", "light"]);
    assert_eq!(run_cli_success(home.path(), &["theme"]).trim(), "light");
}

#[test]
fn test_visualize_rejects_non_finite_energy() {
    let home = tempfile::tempdir().unwrap();
    for value in ["NaN", "inf"] {
        let (stdout, _, code) = run_cli(home.path(), &["visualize", "co2", "--energy", value]);
        assert_ne!(code, 0, "accepted --energy {value}");
        assert!(!stdout.contains("NaN"));
    }
}
