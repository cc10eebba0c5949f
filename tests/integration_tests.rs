//! Integration tests for the DCC CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a dcc command isolated from the user's configuration
fn dcc(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dcc").unwrap();
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .env("HOME", tmp.path())
        .env_remove("DCC_FORMAT")
        .env_remove("DCC_STRICT")
        .env_remove("DCC_LOG");
    cmd
}

fn write(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Requirements, parts and metrics for a small UAV design
fn setup_design(tmp: &TempDir) {
    write(
        tmp,
        "reqs.json",
        r#"{
            "UAV::Requirements::RangeReq": {"name": "RangeReq", "attributes": {"targetValue": "500"}},
            "UAV::Requirements::MaxStructureWeight": {"name": "MaxStructureWeight", "attributes": {"maxValue": "1000"}},
            "UAV::Requirements::CruiseSpeed": {"name": "CruiseSpeed", "attributes": {"minValue": "180"}}
        }"#,
    );
    write(
        tmp,
        "parts.yaml",
        "UAV::Wing:\n  attributes:\n    mass:\n      value: 400\n\
         UAV::Avionics:\n  attributes:\n    mass: {}\n\
         UAV::Fuselage:\n  attributes:\n    mass:\n      value: 700.25\n",
    );
    write(
        tmp,
        "metrics.json",
        r#"{
            "range_mission": {"range_nm": 550, "cruise_speed_kts": 171},
            "mass_properties": {"empty_weight_lbm": 850}
        }"#,
    );
}

fn design_args() -> Vec<&'static str> {
    vec![
        "check",
        "--reqs",
        "reqs.json",
        "--parts",
        "parts.yaml",
        "--metrics",
        "metrics.json",
    ]
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("engineering requirements"));
}

#[test]
fn test_version_displays() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dcc"));
}

#[test]
fn test_unknown_command_fails() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_text_report() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    dcc(&tmp)
        .args(design_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Compliance checks"))
        .stdout(predicate::str::contains(
            "  Range                          PASS  (550.0 nm >= 500.0 nm, margin: +10.0%)",
        ))
        .stdout(predicate::str::contains(
            "  Structure Weight               PASS  (850.0 lb <= 1000.0 lb, margin: +15.0%)",
        ))
        .stdout(predicate::str::contains(
            "  Cruise Speed                   FAIL  (171.0 kts >= 180.0 kts, margin: -5.0%)",
        ))
        .stdout(predicate::str::contains(
            "  Architecture Mass Roll-up      FAIL  (1100.3 lb <= 1000.0 lb, margin: -10.0%)",
        ))
        .stdout(predicate::str::contains("2/4 checks passed"));
}

#[test]
fn test_check_quiet_prints_bare_report() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "design.yaml",
        "requirements:\n  r1:\n    name: RangeReq\n    attributes:\n      targetValue: '500'\n\
         metrics:\n  range_mission:\n    range_nm: 400\n",
    );

    dcc(&tmp)
        .args(["check", "--input", "design.yaml", "-q"])
        .assert()
        .success()
        .stdout(
            "  Range                          FAIL  (400.0 nm >= 500.0 nm, margin: -20.0%)\n\n  0/1 checks passed\n",
        );
}

#[test]
fn test_check_empty_bundle() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "empty.json", "{}");

    dcc(&tmp)
        .args(["check", "-i", "empty.json", "-q"])
        .assert()
        .success()
        .stdout("\n  0/0 checks passed\n");
}

#[test]
fn test_check_json_output() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    let output = dcc(&tmp).args(design_args()).args(["-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    let checks: Vec<&str> = results.iter().map(|r| r["check"].as_str().unwrap()).collect();
    assert_eq!(
        checks,
        vec!["Range", "Structure Weight", "Cruise Speed", "Architecture Mass Roll-up"]
    );
    assert_eq!(results[3]["actual"], 1100.3);
    assert_eq!(results[3]["operator"], "<=");
    assert_eq!(results[3]["status"], "FAIL");
    assert_eq!(results[3]["margin"], -10.0);
}

#[test]
fn test_check_csv_output() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    dcc(&tmp)
        .args(design_args())
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "check,requirement,status,actual,operator,target,unit,margin\n",
        ))
        .stdout(predicate::str::contains("Range,RangeReq,PASS,550.0,>=,500.0,nm,+10.0%"));
}

#[test]
fn test_check_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    dcc(&tmp)
        .args(design_args())
        .args(["-f", "md", "-o", "report.md"])
        .assert()
        .success();

    let report = fs::read_to_string(tmp.path().join("report.md")).unwrap();
    assert!(report.starts_with("# Compliance Report"));
    assert!(report.contains("**2/4 checks passed**"));
}

#[test]
fn test_check_strict_fails_on_violation() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    dcc(&tmp)
        .args(design_args())
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("2/4 checks passed"))
        .stderr(predicate::str::contains("2 of 4 checks failed"));
}

#[test]
fn test_check_strict_from_env() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    dcc(&tmp)
        .args(design_args())
        .env("DCC_STRICT", "true")
        .assert()
        .failure();
}

#[test]
fn test_check_strict_passes_when_compliant() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "reqs.yaml",
        "r:\n  name: CruiseSpeed\n  attributes:\n    minValue: 150\n",
    );
    write(&tmp, "metrics.yaml", "range_mission:\n  cruise_speed_kts: 171\n");

    dcc(&tmp)
        .args(["check", "--reqs", "reqs.yaml", "--metrics", "metrics.yaml", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 checks passed"));
}

#[test]
fn test_check_ignores_loose_metric_entries() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "reqs.json",
        r#"{"r1": {"name": "RangeReq", "attributes": {"targetValue": "500"}}}"#,
    );
    write(
        &tmp,
        "metrics.json",
        r#"{"run_id": "abc", "range_mission": {"range_nm": 550}}"#,
    );

    dcc(&tmp)
        .args(["check", "--reqs", "reqs.json", "--metrics", "metrics.json", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 checks passed"));
}

#[test]
fn test_check_requires_input() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input documents"));
}

#[test]
fn test_check_non_numeric_target_fails() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "reqs.json",
        r#"{"r1": {"name": "RangeReq", "attributes": {"targetValue": "TBD"}}}"#,
    );

    dcc(&tmp)
        .args(["check", "--reqs", "reqs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not numeric"));
}

#[test]
fn test_check_malformed_document_fails() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "metrics.json", "{\"range_mission\": {\"range_nm\": 550,}}");

    dcc(&tmp)
        .args(["check", "--metrics", "metrics.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be decoded"));
}

#[test]
fn test_check_unsupported_extension() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "reqs.toml", "x = 1");

    dcc(&tmp)
        .args(["check", "--reqs", "reqs.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported document type"));
}

// ============================================================================
// Rules and Config Command Tests
// ============================================================================

#[test]
fn test_rules_lists_registry() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture Mass Roll-up"))
        .stdout(predicate::str::contains("metrics.range_mission.cruise_speed_kts"));
}

#[test]
fn test_rules_json() {
    let tmp = TempDir::new().unwrap();
    let output = dcc(&tmp).args(["rules", "-f", "json"]).output().unwrap();
    assert!(output.status.success());
    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules.as_array().unwrap().len(), 4);
    assert_eq!(rules[0]["requirement"], "RangeReq");
}

#[test]
fn test_config_set_changes_default_format() {
    let tmp = TempDir::new().unwrap();
    setup_design(&tmp);

    dcc(&tmp)
        .args(["config", "set", "default_format", "json"])
        .assert()
        .success();
    assert!(tmp.path().join(".dcc/config.yaml").exists());

    dcc(&tmp)
        .args(["config", "show", "default_format"])
        .assert()
        .success()
        .stdout("json\n");

    let output = dcc(&tmp).args(design_args()).output().unwrap();
    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 4);
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .args(["config", "set", "author", "someone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    dcc(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dcc"));
}
