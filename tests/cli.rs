//! Integration tests for the sambat binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

fn stdout_json(args: &[&str]) -> Value {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(args);
    let output = cmd.assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).expect("Valid JSON output")
}

#[test]
fn to_bs_text() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["to-bs", "2025-04-14"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2082/01/01 BS = 14 Apr 2025 AD"));
}

#[test]
fn to_bs_full_style() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["to-bs", "2025-07-16", "--style", "full"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("२०८२ श्रावण १"));
}

#[test]
fn to_ad_json() {
    let json = stdout_json(&["to-ad", "2082/04/01", "--json"]);
    assert_eq!(json["ad"], "2025-07-16");
    assert_eq!(json["bs"]["year"], 2082);
    assert_eq!(json["bs"]["month"], 4);
    assert_eq!(json["bs"]["day"], 1);
    assert_eq!(json["weekday"], 3);
}

#[test]
fn to_ad_rejects_invalid_date() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["to-ad", "2082/13/01"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid BS date"));
}

#[test]
fn to_bs_out_of_range_fails() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["to-bs", "1900-01-01"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("BS year 1999 not supported"));
}

#[test]
fn grid_english() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["grid", "2082", "4", "--english"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Shrawan 2082\n"))
        .stdout(predicate::str::contains("Sun  Mon  Tue"));
}

#[test]
fn grid_json() {
    let json = stdout_json(&["grid", "2082", "4", "--json"]);
    assert_eq!(json["first_weekday"], 3);
    assert_eq!(json["days_in_month"], 32);
    let weeks = json["weeks"].as_array().expect("weeks is array");
    assert_eq!(weeks.len(), 5);
    assert!(weeks[0][0].is_null());
    assert_eq!(weeks[0][3], 1);
}

#[test]
fn fiscal_by_year_json() {
    let json = stdout_json(&["fiscal", "--year", "2082", "--json"]);
    let windows = json.as_array().expect("array of windows");
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0]["code"], "2082/83");
    assert_eq!(windows[0]["start_ad"], "2025-07-16");
    assert_eq!(windows[0]["end_ad"], "2026-07-17");
}

#[test]
fn fiscal_by_code_text() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["fiscal", "--code", "2081/82"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2081/82  2081/04/01 - 2082/03/31"));
}

#[test]
fn fiscal_bad_code() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["fiscal", "--code", "2081/83"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid fiscal year code"));
}

#[test]
fn fiscal_extreme_year_fails_cleanly() {
    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["fiscal", "--year", "2147483647"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("BS year 2147483647 not supported"));

    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["fiscal", "--code", "2147483647/48"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid fiscal year code"));
}

#[test]
fn fiscal_list_centres_on_current_year() {
    let json = stdout_json(&["fiscal", "--list", "--json"]);
    let windows = json.as_array().expect("array of windows");
    assert_eq!(windows.len(), 5);

    let current = stdout_json(&["fiscal", "--json"]);
    assert_eq!(windows[2], current[0]);

    let short = stdout_json(&["fiscal", "--list", "-n", "3", "--json"]);
    assert_eq!(short.as_array().expect("array of windows").len(), 3);
}

#[test]
fn today_json() {
    let json = stdout_json(&["today", "--json"]);
    let year = json["bs"]["year"].as_i64().expect("numeric year");
    assert!((2000..=2090).contains(&year));
    assert!(json["ad"].is_string());
    assert!(json["weekday"].as_u64().expect("numeric weekday") < 7);
}

#[test]
fn validate_reports_soft_failure() {
    let json = stdout_json(&["validate", "not-a-date", "--json"]);
    assert_eq!(json["valid"], false);
    assert!(json["date"].is_null());

    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.args(["validate", "2082.2.32"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid: 2082/02/32"));
}

#[test]
fn config_file_sets_style() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sambat.toml");
    std::fs::write(&path, "[display]\nstyle = \"numeric\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.arg("--config").arg(&path).args(["to-bs", "2025-04-14"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("२०८२/१/१ BS"));
}

#[test]
fn config_file_bad_style() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sambat.toml");
    std::fs::write(&path, "[display]\nstyle = \"long\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sambat");
    cmd.arg("--config").arg(&path).args(["to-bs", "2025-04-14"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid display style"));
}
