//! Fixture builders shared by the integration suites.

use survey_core::report::{AnnualReport, ForumPlatform, InstitutionKind, MonthlyReport, Wing};
use survey_core::wizard::validation::total_areas_collected;

/// An annual report that passes every step's completion predicate.
pub fn complete_annual() -> AnnualReport {
    let mut report = AnnualReport::default();
    report.district = "Malappuram".into();

    let demographics = &mut report.demographics;
    demographics.locality_kind = "Panchayat".into();
    demographics.total_population = Some(45_000);
    demographics.muslim_population = Some(12_000);
    demographics.households = Some(9_800);
    demographics.mahallu_count = Some(14);
    demographics.muslim_percentage = Some("26.7".into());

    for wing in Wing::ALL {
        let counts = report.organization.wings.wing_mut(wing);
        counts.components = Some(5);
        counts.members = Some(120);
        counts.workers = Some(40);
        if total_areas_collected(wing) {
            counts.total_areas = Some(3);
        }
    }
    for kind in InstitutionKind::ALL {
        let metrics = report.organization.institutions.kind_mut(kind);
        metrics.count = Some(2);
        metrics.students_count = Some(350);
    }
    report.organization.main_campuses.students_count = Some(75);

    for platform in ForumPlatform::ALL {
        let counts = report.forums.platform_mut(platform);
        counts.count = Some(4);
        counts.cooperating_others = Some(1);
    }

    let systems = &mut report.systems;
    systems.ration_kits = Some(60);
    systems.medical_aid = Some(25);
    systems.education_aid = Some(80);
    systems.water_projects = Some(2);
    systems.housing.built = Some(1);
    systems.housing.repaired = Some(6);
    systems.zakat.collected_families = Some(140);
    systems.zakat.disbursed_families = Some(90);
    systems.interest_free_fund_active = true;

    let projections = &mut report.projections;
    projections.vision = "Reach every mahallu".into();
    projections.focus_areas = "Student wings".into();
    projections.new_members_target = Some(200);
    projections.new_workers_target = Some(50);
    for wing in Wing::ALL {
        projections.components_to_form_in_6_months.set(wing, Some(1));
    }

    report
}

/// A monthly return whose scope step passes.
#[allow(dead_code)]
pub fn complete_monthly() -> MonthlyReport {
    let mut report = MonthlyReport::default();
    report.district = "Palakkad".into();
    report.month = "2026-07".into();
    report.activities.programs_held = Some(6);
    report.meetings.committee_meetings = Some(2);
    report
}
