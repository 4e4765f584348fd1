//! Horizon-end summary output tests.

use predicates::prelude::*;

use super::helpers::irm_cmd;

#[test]
fn test_summary_reference_scenario() {
    // 80% utilization, 5% observed borrow rate: err = -0.111111,
    // start rate at target = 5 / 0.916667 = 5.4545%
    irm_cmd()
        .args(["summary", "--utilization", "80", "--borrow-rate", "5.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Model Parameters"))
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("-0.111111"))
        .stdout(predicate::str::contains("5.4545%"))
        .stdout(predicate::str::contains("240 hours"));
}

#[test]
fn test_summary_zero_horizon_mode_b() {
    irm_cmd()
        .args([
            "summary",
            "--utilization",
            "80",
            "--rate-at-target",
            "5.0",
            "--horizon",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("End Rate@Target (APR):    5.0000%"))
        .stdout(predicate::str::contains("Avg Rate@Target (APR):    5.0000%"));
}

#[test]
fn test_summary_json_output() {
    let output = irm_cmd()
        .args([
            "--format",
            "json",
            "summary",
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
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["utilization"], 80.0);
    assert_eq!(summary["horizon"], 10);
    assert_eq!(summary["unit"], "days");

    let start = summary["start_rate_at_target"].as_f64().unwrap();
    assert!((start - 5.454545).abs() < 1e-4);

    let err = summary["normalized_err"].as_f64().unwrap();
    assert!((err + 1.0 / 9.0).abs() < 1e-9);

    // Ten days below target: the projected end rate sits under the start
    let end = summary["point"]["end_rate_at_target"].as_f64().unwrap();
    assert!(end < start);
}

#[test]
fn test_summary_respects_model_overrides() {
    irm_cmd()
        .args([
            "summary",
            "--utilization",
            "50",
            "--borrow-rate",
            "5.0",
            "--target-utilization",
            "50",
        ])
        .assert()
        .success()
        // At target, the error is zero and nothing drifts
        .stdout(predicate::str::contains("Normalized Error:         0.000000"))
        .stdout(predicate::str::contains("End Borrow Rate (APR):    5.0000%"));
}
