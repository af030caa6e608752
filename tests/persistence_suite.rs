mod common;

use std::fs;

use common::{complete_annual, complete_monthly};
use survey_core::report::FormKind;
use survey_core::utils::persistence::{load_annual_from_file, save_record_to_file, DraftStore};
use tempfile::tempdir;

#[test]
fn draft_round_trips_through_the_store() {
    let temp = tempdir().unwrap();
    let store = DraftStore::new(Some(temp.path().to_path_buf())).unwrap();

    let report = complete_annual();
    let path = store.save(FormKind::Annual, "Malappuram", &report).unwrap();
    assert!(path.exists());

    let loaded = store.load_annual("Malappuram").unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn draft_names_are_sanitized_and_listed() {
    let temp = tempdir().unwrap();
    let store = DraftStore::new(Some(temp.path().to_path_buf())).unwrap();

    store
        .save(FormKind::Monthly, "Palakkad 2026-07", &complete_monthly())
        .unwrap();
    store
        .save(FormKind::Annual, "Kollam", &complete_annual())
        .unwrap();

    let monthly = store.list(FormKind::Monthly).unwrap();
    assert_eq!(monthly, vec!["palakkad-2026-07".to_string()]);

    // Listings are per form kind.
    let annual = store.list(FormKind::Annual).unwrap();
    assert_eq!(annual, vec!["kollam".to_string()]);
}

#[test]
fn missing_draft_reports_a_structured_error() {
    let temp = tempdir().unwrap();
    let store = DraftStore::new(Some(temp.path().to_path_buf())).unwrap();
    let err = store.load_annual("nowhere").unwrap_err();
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn legacy_draft_missing_newer_fields_loads_with_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("legacy.json");
    fs::write(
        &path,
        r#"{
            "district": "Idukki",
            "partA": { "totalPopulation": 30000, "localityKind": "Panchayat" },
            "partB": { "wings": { "jih": { "members": 80 } } }
        }"#,
    )
    .unwrap();

    let report = load_annual_from_file(&path).unwrap();
    assert_eq!(report.demographics.total_population, Some(30_000));
    assert_eq!(report.demographics.households, None);
    assert_eq!(report.organization.wings.jih.members, Some(80));
    assert_eq!(report.organization.wings.jih.components, None);
    assert_eq!(report.organization.wings.vanitha.members, None);
    assert_eq!(report.forums.youth.count, None);
}

#[test]
fn atomic_save_failure_preserves_the_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("report.json");
    let report = complete_annual();
    save_record_to_file(&report, &path).unwrap();
    let original = fs::read_to_string(&path).unwrap();

    // A directory squatting on the staging path forces the write to
    // fail before the rename.
    fs::create_dir_all(path.with_extension("tmp")).unwrap();
    let mut changed = report.clone();
    changed.district = "Changed".into();
    assert!(save_record_to_file(&changed, &path).is_err());

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
