mod common;

use common::{complete_annual, complete_monthly};
use survey_core::report::{
    annual_from_stored, AnnualPatch, AnnualReport, DemographicsPatch, MonthlyReport,
};
use survey_core::session::SessionProfile;
use survey_core::wizard::{FormWizard, SurveyForm};

#[test]
fn editing_flow_patches_one_leaf_and_keeps_the_rest_default() {
    let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
    wizard.reset();
    wizard.update(AnnualPatch::Demographics(DemographicsPatch {
        total_population: Some(Some(50_000)),
        ..DemographicsPatch::default()
    }));

    let part = &wizard.record().demographics;
    assert_eq!(part.total_population, Some(50_000));
    assert_eq!(part.muslim_population, None);
    assert_eq!(part.households, None);
    assert_eq!(part.locality_kind, "");
    assert_eq!(part.muslim_percentage, None);
}

#[test]
fn step_cursor_clamps_at_both_ends() {
    let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
    wizard.prev_step();
    assert_eq!(wizard.step(), 1);

    for _ in 0..AnnualReport::STEPS + 2 {
        wizard.next_step();
    }
    assert_eq!(wizard.step(), AnnualReport::STEPS);
    wizard.next_step();
    wizard.next_step();
    assert_eq!(wizard.step(), AnnualReport::STEPS);
}

#[test]
fn reset_returns_to_the_documented_default_shape() {
    let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
    wizard.set_record(complete_annual());
    wizard.next_step();
    wizard.next_step();

    wizard.reset();
    assert_eq!(wizard.step(), 1);
    assert_eq!(wizard.record(), &AnnualReport::default());
}

#[test]
fn session_district_prefills_and_survives_reset() {
    let mut wizard: FormWizard<AnnualReport> =
        FormWizard::new(SessionProfile::for_district("Kozhikode"));
    assert_eq!(wizard.record().district, "Kozhikode");

    wizard.update(AnnualPatch::District("Wayanad".into()));
    wizard.reset();
    assert_eq!(wizard.record().district, "Kozhikode");
}

#[test]
fn loading_a_partial_legacy_record_fills_missing_wing_keys() {
    let stored = serde_json::json!({
        "district": "Thrissur",
        "partE": {
            "componentsToFormIn6Months": { "jih": 2, "sio": 1 }
        }
    });
    let record = annual_from_stored(stored).unwrap();

    let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
    wizard.set_record(record);

    let targets = &wizard.record().projections.components_to_form_in_6_months;
    assert_eq!(targets.jih, Some(2));
    assert_eq!(targets.malarvadi, None);
    assert_eq!(targets.teen_india, None);
}

#[test]
fn predicate_is_pure_across_repeated_calls() {
    let mut wizard: FormWizard<AnnualReport> =
        FormWizard::resume(SessionProfile::anonymous(), complete_annual());
    for _ in 0..AnnualReport::STEPS {
        assert_eq!(
            wizard.current_step_complete(),
            wizard.current_step_complete()
        );
        wizard.next_step();
    }
}

#[test]
fn complete_fixture_passes_every_step() {
    let wizard: FormWizard<AnnualReport> =
        FormWizard::resume(SessionProfile::anonymous(), complete_annual());
    assert!(wizard.all_steps_complete());
}

#[test]
fn monthly_wizard_has_two_steps_and_an_optional_second() {
    let mut wizard: FormWizard<MonthlyReport> =
        FormWizard::resume(SessionProfile::anonymous(), complete_monthly());
    assert_eq!(wizard.step_count(), 2);
    assert!(wizard.current_step_complete());

    wizard.next_step();
    assert!(wizard.is_last_step());
    assert!(wizard.current_step_complete());

    // A blank return still passes the narrative step.
    let blank: FormWizard<MonthlyReport> = FormWizard::new(SessionProfile::anonymous());
    assert!(!blank.current_step_complete());
}
