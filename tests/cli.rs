//! End-to-end CLI tests
//!
//! Each test runs the binary against a throwaway snapshot file.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn costwise(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("costwise").unwrap();
    cmd.arg("--file")
        .arg(temp_dir.path().join("costs.json"));
    cmd
}

#[test]
fn tax_estimate_for_texas() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .args(["tax", "Texas", "--gross", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$80350.00"))
        .stdout(predicate::str::contains("estimate"));
}

#[test]
fn tax_unknown_state_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .args(["tax", "Unknownistan", "--gross", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tax data"));
}

#[test]
fn states_lists_rate_table() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .arg("states")
        .assert()
        .success()
        .stdout(predicate::str::contains("California"))
        .stdout(predicate::str::contains("13.30%"))
        .stdout(predicate::str::contains("Wyoming"));
}

#[test]
fn project_shows_all_cadences() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .args(["project", "100", "--income", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one-time"))
        .stdout(predicate::str::contains("daily"))
        .stdout(predicate::str::contains("every 4 months"))
        .stdout(predicate::str::contains("yearly"));
}

#[test]
fn project_rejects_zero_income() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .args(["project", "100", "--income", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid income base"));
}

#[test]
fn summary_without_profile_hints_setup() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income profile not set"));
}

#[test]
fn full_workflow_produces_advisories() {
    let temp_dir = TempDir::new().unwrap();

    costwise(&temp_dir)
        .args(["income", "set", "60000", "--state", "Texas"])
        .assert()
        .success();

    costwise(&temp_dir)
        .args(["expense", "add", "Rent", "1200", "--frequency", "monthly", "--need"])
        .assert()
        .success();

    costwise(&temp_dir)
        .args(["expense", "add", "Streaming", "15.99", "--favorite"])
        .assert()
        .success();

    costwise(&temp_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Streaming"));

    costwise(&temp_dir)
        .args(["expense", "list", "--needs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Streaming").not());

    // Rent $14,400/yr + streaming against ~$48,210 after-tax: under 50%,
    // both categories populated
    costwise(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("after-tax"))
        .stdout(predicate::str::contains("Healthy saving habits"))
        .stdout(predicate::str::contains("50/30/20"));
}

#[test]
fn expense_remove_accepts_printed_short_id() {
    let temp_dir = TempDir::new().unwrap();

    let output = costwise(&temp_dir)
        .args(["expense", "add", "Gym", "40"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // "Added expense exp-xxxxxxxx." -- feed that id straight back in
    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .split_whitespace()
        .find(|token| token.starts_with("exp-"))
        .unwrap()
        .trim_end_matches('.')
        .to_string();

    costwise(&temp_dir)
        .args(["expense", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Gym\""));
}

#[test]
fn summary_top_limits_advisories() {
    let temp_dir = TempDir::new().unwrap();

    costwise(&temp_dir)
        .args(["income", "set", "60000"])
        .assert()
        .success();

    // No needs tracked, low spending: healthy-saving and track-essentials fire
    costwise(&temp_dir)
        .args(["summary", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Track essential expenses"))
        .stdout(predicate::str::contains("Healthy saving habits").not());
}

#[test]
fn config_prints_snapshot_path() {
    let temp_dir = TempDir::new().unwrap();
    costwise(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("costs.json"));
}
