//! Trajectory simulation output tests.

use predicates::prelude::*;

use super::helpers::irm_cmd;

#[test]
fn test_simulate_table_output() {
    irm_cmd()
        .args([
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--horizon",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("End Borrow Rate"))
        .stdout(predicate::str::contains("0 hours"))
        .stdout(predicate::str::contains("10 hours"))
        // At t = 0 the observed borrow rate is reproduced exactly
        .stdout(predicate::str::contains("5.0000%"));
}

#[test]
fn test_simulate_days_axis() {
    irm_cmd()
        .args([
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--horizon",
            "10",
            "--unit",
            "days",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 days"));
}

#[test]
fn test_simulate_json_output() {
    let output = irm_cmd()
        .args([
            "--format",
            "json",
            "simulate",
            "--utilization",
            "80",
            "--borrow-rate",
            "5.0",
            "--horizon",
            "240",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let points: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let points = points.as_array().unwrap();

    // Inclusive of both t = 0 and the endpoint
    assert_eq!(points.len(), 241);
    assert_eq!(points[0]["elapsed_seconds"], 0.0);

    // Round trip at t = 0: the observed rate comes back
    let first_borrow = points[0]["end_borrow_rate"].as_f64().unwrap();
    assert!((first_borrow - 5.0).abs() < 1e-9);

    // Below target, the trajectory drifts down
    let last_borrow = points[240]["end_borrow_rate"].as_f64().unwrap();
    assert!(last_borrow < first_borrow);
}

#[test]
fn test_simulate_mode_b_json() {
    let output = irm_cmd()
        .args([
            "--format",
            "json",
            "simulate",
            "--utilization",
            "80",
            "--rate-at-target",
            "5.0",
            "--horizon",
            "0",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let points: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let points = points.as_array().unwrap();
    assert_eq!(points.len(), 1);

    // Zero horizon: end and average rate at target equal the input exactly
    assert_eq!(points[0]["end_rate_at_target"], 5.0);
    assert_eq!(points[0]["avg_rate_at_target"], 5.0);
}

#[test]
fn test_simulate_at_target_utilization_is_flat() {
    let output = irm_cmd()
        .args([
            "--format",
            "json",
            "simulate",
            "--utilization",
            "90",
            "--borrow-rate",
            "5.0",
            "--horizon",
            "100",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let points: serde_json::Value = serde_json::from_slice(&output).unwrap();
    for point in points.as_array().unwrap() {
        let borrow = point["end_borrow_rate"].as_f64().unwrap();
        assert!((borrow - 5.0).abs() < 1e-9);
    }
}
