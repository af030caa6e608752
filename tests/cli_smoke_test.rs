use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn new_annual_prints_a_default_record() {
    Command::cargo_bin("survey_core_cli")
        .unwrap()
        .args(["new", "annual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"partA\""))
        .stdout(predicate::str::contains("\"componentsToFormIn6Months\""));
}

#[test]
fn validate_reports_per_step_status() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("report.json");
    std::fs::write(&path, "{}").unwrap();

    Command::cargo_bin("survey_core_cli")
        .unwrap()
        .args(["validate", "annual", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1: incomplete"))
        .stdout(predicate::str::contains("step 5: incomplete"));
}

#[test]
fn monthly_narrative_step_validates_even_on_an_empty_record() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("return.json");
    std::fs::write(&path, "{}").unwrap();

    Command::cargo_bin("survey_core_cli")
        .unwrap()
        .args(["validate", "monthly", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1: incomplete"))
        .stdout(predicate::str::contains("step 2: complete"));
}

#[test]
fn unknown_command_fails_with_usage() {
    Command::cargo_bin("survey_core_cli")
        .unwrap()
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
