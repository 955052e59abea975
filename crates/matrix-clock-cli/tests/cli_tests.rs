//! Integration tests for the `matrixclock` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including JSON output, error reporting and a
//! short run of the console clock.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn matrixclock() -> Command {
    let mut cmd = Command::cargo_bin("matrixclock").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn json_stdout(args: &[&str]) -> serde_json::Value {
    let output = matrixclock().args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// local
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn local_winter_timestamp() {
    matrixclock()
        .args(["local", "1677816367"])
        .assert()
        .success()
        .stdout("05:06:07\nFri, 03 Mar 2023\nCET\n");
}

#[test]
fn local_summer_timestamp_as_json() {
    let v = json_stdout(&["local", "1688205600", "--json"]);
    assert_eq!(v["zone"], "CEST");
    assert_eq!(v["offset_seconds"], 7200);
    assert_eq!(v["time"], "12:00:00");
    assert_eq!(v["date"], "Sat, 01 Jul 2023");
    assert_eq!(v["hour"], 12);
    assert_eq!(v["weekday"], 5);
    assert_eq!(v["day_of_year"], 182);
}

#[test]
fn local_y2k_epoch_matches_unix() {
    let v = json_stdout(&["local", "731131567", "--epoch", "y2k", "--json"]);
    assert_eq!(v["unix_timestamp"], 1_677_816_367_i64);
    assert_eq!(v["time"], "05:06:07");
}

#[test]
fn local_fractional_seconds_are_floored() {
    matrixclock()
        .args(["local", "1677816367.9"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("05:06:07\n"));
}

#[test]
fn local_negative_timestamp() {
    matrixclock()
        .args(["local", "-1"])
        .assert()
        .success()
        .stdout("00:59:59\nThu, 01 Jan 1970\nCET\n");
}

#[test]
fn local_rejects_garbage() {
    matrixclock()
        .args(["local", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp"));
}

#[test]
fn local_rejects_unknown_epoch() {
    matrixclock()
        .args(["local", "0", "--epoch", "gps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid epoch"));
}

// ─────────────────────────────────────────────────────────────────────────────
// expand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn expand_unix_epoch_day() {
    matrixclock()
        .args(["expand", "1970-01-01T00:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00:00"))
        .stdout(predicate::str::contains("Thu, 01 Jan 1970"))
        .stdout(predicate::str::contains("day 1 of the year"));
}

#[test]
fn expand_leap_year_march_as_json() {
    let v = json_stdout(&["expand", "2000-03-01T00:00:00", "--json"]);
    assert_eq!(v["weekday"], 2);
    assert_eq!(v["day_of_year"], 61);
    assert_eq!(v["year"], 2000);
}

#[test]
fn expand_rejects_invalid_day() {
    matrixclock()
        .args(["expand", "2023-02-30T00:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid short date"));
}

#[test]
fn expand_rejects_leap_day_of_common_century() {
    matrixclock()
        .args(["expand", "2100-02-29T00:00:00"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid short date '2100-02-29T00:00:00'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// dst
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dst_prints_both_transitions() {
    matrixclock()
        .args(["dst", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CEST begins 1679792400 (Sun, 26 Mar 2023 01:00:00 UTC)"))
        .stdout(predicate::str::contains("CEST ends   1698541200 (Sun, 29 Oct 2023 01:00:00 UTC)"));
}

#[test]
fn dst_warns_outside_rule_years() {
    matrixclock()
        .args(["dst", "2150"])
        .assert()
        .success()
        .stderr(predicate::str::contains("exact only for 1996..=2099"));
}

// ─────────────────────────────────────────────────────────────────────────────
// now / run
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn now_prints_time_date_and_zone() {
    matrixclock()
        .arg("now")
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"^\d{2}:\d{2}:\d{2}\n\w{3}, \d{2} \w{3} \d{4}\nCES?T\n$")
                .unwrap(),
        );
}

#[test]
fn now_json_has_offset() {
    let v = json_stdout(&["now", "--json"]);
    let offset = v["offset_seconds"].as_i64().unwrap();
    assert!(offset == 3600 || offset == 7200);
}

#[test]
fn run_debug_prints_faces() {
    matrixclock()
        .args(["run", "--debug", "--seconds", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" / 21.0~° 45.0~%"));
}

#[test]
fn run_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clock.toml");
    std::fs::write(&path, "sync_attempts = 0\n").unwrap();

    matrixclock()
        .args(["run", "--seconds", "1", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("sync_attempts"));
}
