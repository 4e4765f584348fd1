//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without running a simulation.

use predicates::prelude::*;

use super::helpers::irm_cmd;

#[test]
fn test_help_output() {
    irm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("irm"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_simulate_help_output() {
    irm_cmd()
        .args(["simulate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--utilization"))
        .stdout(predicate::str::contains("--borrow-rate"))
        .stdout(predicate::str::contains("--rate-at-target"))
        .stdout(predicate::str::contains("--horizon"));
}

#[test]
fn test_invalid_command() {
    irm_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_simulate_missing_utilization() {
    irm_cmd()
        .args(["simulate", "--borrow-rate", "5.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_simulate_missing_observation() {
    irm_cmd()
        .args(["simulate", "--utilization", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_simulate_conflicting_observations() {
    irm_cmd()
        .args([
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--rate-at-target",
            "5.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_utilization_out_of_range_rejected() {
    irm_cmd()
        .args(["simulate", "--utilization", "120", "--borrow-rate", "5.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the accepted range"));
}

#[test]
fn test_rate_out_of_range_rejected() {
    irm_cmd()
        .args(["summary", "--utilization", "80", "--borrow-rate", "1500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the accepted range"));
}

#[test]
fn test_invalid_steepness_rejected() {
    irm_cmd()
        .args([
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--steepness",
            "1.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 1"));
}

#[test]
fn test_inverted_rate_bounds_rejected() {
    irm_cmd()
        .args([
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--min-rate",
            "10.0",
            "--max-rate",
            "2.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bounds"));
}

#[test]
fn test_invalid_unit_rejected() {
    irm_cmd()
        .args([
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--unit",
            "weeks",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
