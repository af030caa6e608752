//! Step views: read the current record, prompt with it as the
//! default, and relay each entry back through the wizard's patch path.

use chrono::NaiveDate;

use crate::cli::{io, output};
use crate::errors::SurveyError;
use crate::report::{
    ActivitySummaryPatch, AnnualPatch, AnnualReport, CampusCountsPatch, DemographicsPatch,
    ForumCountsPatch, ForumPlatform, ForumsPatch, HousingPatch, InstitutionKind,
    InstitutionMetricsPatch, MeetingCountsPatch, MonthlyNarrativePatch, MonthlyPatch,
    MonthlyReport, OrganizationPatch, ProjectionsPatch, PublicSystemsPatch, Wing,
    WingCountsPatch, ZakatPatch, LOCALITY_KINDS,
};
use crate::wizard::{validation, FormWizard};

/// Districts offered when the session carries no scoped identity.
pub const DISTRICTS: [&str; 14] = [
    "Alappuzha",
    "Ernakulam",
    "Idukki",
    "Kannur",
    "Kasaragod",
    "Kollam",
    "Kottayam",
    "Kozhikode",
    "Malappuram",
    "Palakkad",
    "Pathanamthitta",
    "Thiruvananthapuram",
    "Thrissur",
    "Wayanad",
];

pub fn annual_step_title(step: usize) -> &'static str {
    match step {
        1 => "Demographics",
        2 => "Organizational counts",
        3 => "Public forums",
        4 => "Public systems",
        5 => "Growth projections",
        _ => "",
    }
}

pub fn monthly_step_title(step: usize) -> &'static str {
    match step {
        1 => "Scope and activity",
        2 => "Narrative",
        _ => "",
    }
}

pub fn run_annual_step(
    wizard: &mut FormWizard<AnnualReport>,
    district_locked: bool,
) -> Result<(), SurveyError> {
    match wizard.step() {
        1 => demographics_step(wizard, district_locked),
        2 => organization_step(wizard),
        3 => forums_step(wizard),
        4 => systems_step(wizard),
        _ => projections_step(wizard),
    }
}

pub fn run_monthly_step(
    wizard: &mut FormWizard<MonthlyReport>,
    district_locked: bool,
) -> Result<(), SurveyError> {
    match wizard.step() {
        1 => monthly_scope_step(wizard, district_locked),
        _ => monthly_narrative_step(wizard),
    }
}

fn demographics_step(
    wizard: &mut FormWizard<AnnualReport>,
    district_locked: bool,
) -> Result<(), SurveyError> {
    if district_locked {
        output::info(format!("District: {}", wizard.record().district));
    } else {
        let current = wizard.record().district.clone();
        let district = io::prompt_choice("District", &DISTRICTS, &current)?;
        wizard.update(AnnualPatch::District(district));
    }

    let current = wizard.record().demographics.clone();
    let locality_kind = io::prompt_choice("Locality type", &LOCALITY_KINDS, &current.locality_kind)?;
    let total_population = io::prompt_count("Total population", current.total_population)?;
    let muslim_population = io::prompt_count("Muslim population", current.muslim_population)?;
    let muslim_percentage = io::prompt_percent("Muslim percentage", &current.muslim_percentage)?;
    let households = io::prompt_count("Households", current.households)?;
    let mahallu_count = io::prompt_count("Mahallu count", current.mahallu_count)?;

    wizard.update(AnnualPatch::Demographics(DemographicsPatch {
        locality_kind: Some(locality_kind),
        total_population: Some(total_population),
        muslim_population: Some(muslim_population),
        households: Some(households),
        mahallu_count: Some(mahallu_count),
        muslim_percentage: Some(muslim_percentage),
    }));
    Ok(())
}

fn organization_step(wizard: &mut FormWizard<AnnualReport>) -> Result<(), SurveyError> {
    for wing in Wing::ALL {
        output::info(format!("-- {} --", wing.label()));
        let current = wizard.record().organization.wings.wing(wing).clone();
        let components = io::prompt_count("Components", current.components)?;
        let members = io::prompt_count("Members", current.members)?;
        let workers = io::prompt_count("Workers", current.workers)?;
        let total_areas = if validation::total_areas_collected(wing) {
            Some(io::prompt_count("Total areas", current.total_areas)?)
        } else {
            None
        };

        wizard.update(AnnualPatch::Organization(OrganizationPatch {
            wing: Some((
                wing,
                WingCountsPatch {
                    components: Some(components),
                    members: Some(members),
                    workers: Some(workers),
                    total_areas,
                },
            )),
            ..OrganizationPatch::default()
        }));
    }

    for kind in InstitutionKind::ALL {
        let current = wizard.record().organization.institutions.kind(kind).clone();
        let count = io::prompt_count(&format!("{}: count", kind.label()), current.count)?;
        let students_count = io::prompt_count(
            &format!("{}: students", kind.label()),
            current.students_count,
        )?;

        wizard.update(AnnualPatch::Organization(OrganizationPatch {
            institution: Some((
                kind,
                InstitutionMetricsPatch {
                    count: Some(count),
                    students_count: Some(students_count),
                },
            )),
            ..OrganizationPatch::default()
        }));
    }

    let current = wizard.record().organization.main_campuses.clone();
    let students_count = io::prompt_count("Main campuses: students", current.students_count)?;
    let count = io::prompt_count("Main campuses: campus count (optional)", current.count)?;
    wizard.update(AnnualPatch::Organization(OrganizationPatch {
        main_campuses: Some(CampusCountsPatch {
            count: Some(count),
            students_count: Some(students_count),
        }),
        ..OrganizationPatch::default()
    }));
    Ok(())
}

fn forums_step(wizard: &mut FormWizard<AnnualReport>) -> Result<(), SurveyError> {
    for platform in ForumPlatform::ALL {
        output::info(format!("-- {} --", platform.label()));
        let current = wizard.record().forums.platform(platform).clone();
        let count = io::prompt_count("Count", current.count)?;
        let cooperating_others = io::prompt_count("Cooperating with others", current.cooperating_others)?;
        let remarks = io::prompt_text("Remarks (optional)", &current.remarks)?;

        wizard.update(AnnualPatch::Forums(ForumsPatch {
            platform: Some((
                platform,
                ForumCountsPatch {
                    count: Some(count),
                    cooperating_others: Some(cooperating_others),
                    remarks: Some(remarks),
                },
            )),
        }));
    }
    Ok(())
}

fn systems_step(wizard: &mut FormWizard<AnnualReport>) -> Result<(), SurveyError> {
    let current = wizard.record().systems.clone();
    let ration_kits = io::prompt_count("Families receiving ration kits", current.ration_kits)?;
    let medical_aid = io::prompt_count("Families receiving medical aid", current.medical_aid)?;
    let education_aid = io::prompt_count("Students receiving education aid", current.education_aid)?;
    let water_projects = io::prompt_count("Drinking-water projects", current.water_projects)?;
    let built = io::prompt_count("Houses built", current.housing.built)?;
    let repaired = io::prompt_count("Houses repaired", current.housing.repaired)?;
    let collected_families =
        io::prompt_count("Zakat: contributing families", current.zakat.collected_families)?;
    let disbursed_families =
        io::prompt_count("Zakat: supported families", current.zakat.disbursed_families)?;
    let interest_free_fund_active =
        io::prompt_flag("Interest-free fund active?", current.interest_free_fund_active)?;

    wizard.update(AnnualPatch::Systems(PublicSystemsPatch {
        ration_kits: Some(ration_kits),
        medical_aid: Some(medical_aid),
        education_aid: Some(education_aid),
        water_projects: Some(water_projects),
        housing: Some(HousingPatch {
            built: Some(built),
            repaired: Some(repaired),
        }),
        zakat: Some(ZakatPatch {
            collected_families: Some(collected_families),
            disbursed_families: Some(disbursed_families),
        }),
        interest_free_fund_active: Some(interest_free_fund_active),
    }));
    Ok(())
}

fn projections_step(wizard: &mut FormWizard<AnnualReport>) -> Result<(), SurveyError> {
    let current = wizard.record().projections.clone();
    let vision = io::prompt_text("Growth vision", &current.vision)?;
    let focus_areas = io::prompt_text("Focus areas", &current.focus_areas)?;
    let new_members_target = io::prompt_count("New members target", current.new_members_target)?;
    let new_workers_target = io::prompt_count("New workers target", current.new_workers_target)?;

    wizard.update(AnnualPatch::Projections(ProjectionsPatch {
        vision: Some(vision),
        focus_areas: Some(focus_areas),
        new_members_target: Some(new_members_target),
        new_workers_target: Some(new_workers_target),
        component_target: None,
    }));

    output::info("Components to form in 6 months:");
    for wing in Wing::ALL {
        let current = wizard
            .record()
            .projections
            .components_to_form_in_6_months
            .get(wing);
        let target = io::prompt_count(wing.label(), current)?;
        wizard.update(AnnualPatch::Projections(ProjectionsPatch {
            component_target: Some((wing, target)),
            ..ProjectionsPatch::default()
        }));
    }
    Ok(())
}

fn monthly_scope_step(
    wizard: &mut FormWizard<MonthlyReport>,
    district_locked: bool,
) -> Result<(), SurveyError> {
    if district_locked {
        output::info(format!("District: {}", wizard.record().district));
    } else {
        let current = wizard.record().district.clone();
        let district = io::prompt_choice("District", &DISTRICTS, &current)?;
        wizard.update(MonthlyPatch::District(district));
    }

    let current_month = wizard.record().month.clone();
    let month = prompt_month(&current_month)?;
    wizard.update(MonthlyPatch::Month(month));

    let current = wizard.record().activities.clone();
    let programs_held = io::prompt_count("Programs held", current.programs_held)?;
    let total_attendance = io::prompt_count("Total attendance", current.total_attendance)?;
    let new_contacts = io::prompt_count("New contacts", current.new_contacts)?;
    wizard.update(MonthlyPatch::Activities(ActivitySummaryPatch {
        programs_held: Some(programs_held),
        total_attendance: Some(total_attendance),
        new_contacts: Some(new_contacts),
    }));

    let current = wizard.record().meetings.clone();
    let committee_meetings = io::prompt_count("Committee meetings", current.committee_meetings)?;
    let general_body_meetings =
        io::prompt_count("General body meetings", current.general_body_meetings)?;
    let remarks = io::prompt_text("Meeting remarks (optional)", &current.remarks)?;
    wizard.update(MonthlyPatch::Meetings(MeetingCountsPatch {
        committee_meetings: Some(committee_meetings),
        general_body_meetings: Some(general_body_meetings),
        remarks: Some(remarks),
    }));
    Ok(())
}

fn monthly_narrative_step(wizard: &mut FormWizard<MonthlyReport>) -> Result<(), SurveyError> {
    let current = wizard.record().narrative.clone();
    let highlights = io::prompt_text("Highlights (optional)", &current.highlights)?;
    let challenges = io::prompt_text("Challenges (optional)", &current.challenges)?;
    let next_month_plan = io::prompt_text("Plan for next month (optional)", &current.next_month_plan)?;

    wizard.update(MonthlyPatch::Narrative(MonthlyNarrativePatch {
        highlights: Some(highlights),
        challenges: Some(challenges),
        next_month_plan: Some(next_month_plan),
    }));
    Ok(())
}

/// Month entry; re-prompts until blank or a valid `YYYY-MM`.
fn prompt_month(current: &str) -> Result<String, SurveyError> {
    loop {
        let raw = io::prompt_text("Reporting month (YYYY-MM)", current)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        if NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").is_ok() {
            return Ok(trimmed.to_string());
        }
        output::warning("Use YYYY-MM format.");
    }
}
