//! Step-completion predicates and the exemption constants shared by
//! prompting and validation.
//!
//! Presence rules: `Some(0)` counts as entered, blank and
//! whitespace-only text do not. Nothing here mutates or errors; the
//! wizard simply keeps the user on a step that reports incomplete.

use crate::report::{
    Count, Demographics, ForumPlatform, GrowthProjections, InstitutionKind, MonthlyReport,
    OrganizationCounts, PublicForums, PublicSystems, Wing,
};

/// Wings whose `totalAreas` leaf is never collected. Consumed by the
/// prompting layer (prompt skipped) and by
/// [`organization_complete`] (leaf exempt) so the two cannot drift.
pub const TOTAL_AREAS_EXEMPT_WINGS: [Wing; 2] = [Wing::Malarvadi, Wing::TeenIndia];

/// Whether the `totalAreas` leaf is collected for the given wing.
pub fn total_areas_collected(wing: Wing) -> bool {
    !TOTAL_AREAS_EXEMPT_WINGS.contains(&wing)
}

pub fn count_present(value: Count) -> bool {
    value.is_some()
}

pub fn text_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn percent_present(value: &Option<String>) -> bool {
    value.as_deref().map(text_present).unwrap_or(false)
}

/// Demographics step: district plus every leaf of part A.
pub fn demographics_complete(district: &str, part: &Demographics) -> bool {
    text_present(district)
        && text_present(&part.locality_kind)
        && count_present(part.total_population)
        && count_present(part.muslim_population)
        && count_present(part.households)
        && count_present(part.mahallu_count)
        && percent_present(&part.muslim_percentage)
}

/// Organizational-counts step: every wing and institution leaf, minus
/// the declared exemptions and the main-campuses summary.
pub fn organization_complete(part: &OrganizationCounts) -> bool {
    for wing in Wing::ALL {
        let counts = part.wings.wing(wing);
        if !count_present(counts.components)
            || !count_present(counts.members)
            || !count_present(counts.workers)
        {
            return false;
        }
        if total_areas_collected(wing) && !count_present(counts.total_areas) {
            return false;
        }
    }
    for kind in InstitutionKind::ALL {
        let metrics = part.institutions.kind(kind);
        if !count_present(metrics.count) || !count_present(metrics.students_count) {
            return false;
        }
    }
    count_present(part.main_campuses.students_count)
}

/// Public-forums step: `count` and `cooperatingOthers` per platform;
/// remarks never gate.
pub fn forums_complete(part: &PublicForums) -> bool {
    ForumPlatform::ALL.iter().all(|platform| {
        let counts = part.platform(*platform);
        count_present(counts.count) && count_present(counts.cooperating_others)
    })
}

/// Public-systems step: every flat and nested leaf. The boolean flag
/// is always populated by construction.
pub fn systems_complete(part: &PublicSystems) -> bool {
    count_present(part.ration_kits)
        && count_present(part.medical_aid)
        && count_present(part.education_aid)
        && count_present(part.water_projects)
        && count_present(part.housing.built)
        && count_present(part.housing.repaired)
        && count_present(part.zakat.collected_families)
        && count_present(part.zakat.disbursed_families)
}

/// Projections step: both narratives, both targets, and every wing's
/// six-month component target.
pub fn projections_complete(part: &GrowthProjections) -> bool {
    text_present(&part.vision)
        && text_present(&part.focus_areas)
        && count_present(part.new_members_target)
        && count_present(part.new_workers_target)
        && Wing::ALL
            .iter()
            .all(|wing| count_present(part.components_to_form_in_6_months.get(*wing)))
}

/// Monthly return, step 1: only the scope fields gate.
pub fn monthly_scope_complete(report: &MonthlyReport) -> bool {
    text_present(&report.district) && text_present(&report.month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_and_single_characters_satisfy_demographics() {
        let part = Demographics {
            locality_kind: "P".into(),
            total_population: Some(0),
            muslim_population: Some(0),
            households: Some(0),
            mahallu_count: Some(0),
            muslim_percentage: Some("0".into()),
        };
        assert!(demographics_complete("K", &part));
    }

    #[test]
    fn whitespace_only_district_is_absent() {
        let part = Demographics {
            locality_kind: "Panchayat".into(),
            total_population: Some(10),
            muslim_population: Some(5),
            households: Some(2),
            mahallu_count: Some(1),
            muslim_percentage: Some("50".into()),
        };
        assert!(!demographics_complete("   ", &part));
    }

    #[test]
    fn exempt_total_areas_does_not_gate() {
        let mut part = OrganizationCounts::default();
        for wing in Wing::ALL {
            let counts = part.wings.wing_mut(wing);
            counts.components = Some(1);
            counts.members = Some(1);
            counts.workers = Some(1);
            if total_areas_collected(wing) {
                counts.total_areas = Some(1);
            }
        }
        for kind in InstitutionKind::ALL {
            let metrics = part.institutions.kind_mut(kind);
            metrics.count = Some(1);
            metrics.students_count = Some(1);
        }
        part.main_campuses.students_count = Some(100);

        assert!(organization_complete(&part));

        // A non-exempt leaf on an exempt wing still gates.
        part.wings.malarvadi.components = None;
        assert!(!organization_complete(&part));
    }

    #[test]
    fn campus_summary_count_is_exempt() {
        let mut part = OrganizationCounts::default();
        for wing in Wing::ALL {
            let counts = part.wings.wing_mut(wing);
            counts.components = Some(0);
            counts.members = Some(0);
            counts.workers = Some(0);
            counts.total_areas = Some(0);
        }
        for kind in InstitutionKind::ALL {
            let metrics = part.institutions.kind_mut(kind);
            metrics.count = Some(0);
            metrics.students_count = Some(0);
        }
        part.main_campuses.count = None;
        part.main_campuses.students_count = None;
        assert!(!organization_complete(&part));

        part.main_campuses.students_count = Some(0);
        assert!(organization_complete(&part));
    }

    #[test]
    fn forum_remarks_never_gate() {
        let mut part = PublicForums::default();
        for platform in ForumPlatform::ALL {
            let counts = part.platform_mut(platform);
            counts.count = Some(2);
            counts.cooperating_others = Some(0);
        }
        assert!(forums_complete(&part));

        part.students.cooperating_others = None;
        assert!(!forums_complete(&part));
    }
}
