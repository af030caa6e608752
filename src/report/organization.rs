use serde::{Deserialize, Serialize};

use super::{Count, Wing};

/// One wing's organizational tallies.
///
/// `total_areas` is structurally present for every wing but is never
/// collected for Malarvadi and Teen India; those prompts stay disabled
/// and validation exempts the leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WingCounts {
    pub components: Count,
    pub members: Count,
    pub workers: Count,
    pub total_areas: Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WingCountsPatch {
    pub components: Option<Count>,
    pub members: Option<Count>,
    pub workers: Option<Count>,
    pub total_areas: Option<Count>,
}

impl WingCountsPatch {
    pub fn apply(self, target: &mut WingCounts) {
        if let Some(value) = self.components {
            target.components = value;
        }
        if let Some(value) = self.members {
            target.members = value;
        }
        if let Some(value) = self.workers {
            target.workers = value;
        }
        if let Some(value) = self.total_areas {
            target.total_areas = value;
        }
    }
}

/// Per-wing tallies, one record per wing in the fixed set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WingBreakdown {
    pub jih: WingCounts,
    pub vanitha: WingCounts,
    pub solidarity: WingCounts,
    pub sio: WingCounts,
    pub gio: WingCounts,
    pub malarvadi: WingCounts,
    pub teen_india: WingCounts,
}

impl WingBreakdown {
    pub fn wing(&self, wing: Wing) -> &WingCounts {
        match wing {
            Wing::Jih => &self.jih,
            Wing::Vanitha => &self.vanitha,
            Wing::Solidarity => &self.solidarity,
            Wing::Sio => &self.sio,
            Wing::Gio => &self.gio,
            Wing::Malarvadi => &self.malarvadi,
            Wing::TeenIndia => &self.teen_india,
        }
    }

    pub fn wing_mut(&mut self, wing: Wing) -> &mut WingCounts {
        match wing {
            Wing::Jih => &mut self.jih,
            Wing::Vanitha => &mut self.vanitha,
            Wing::Solidarity => &mut self.solidarity,
            Wing::Sio => &mut self.sio,
            Wing::Gio => &mut self.gio,
            Wing::Malarvadi => &mut self.malarvadi,
            Wing::TeenIndia => &mut self.teen_india,
        }
    }
}

/// Institution categories tabulated alongside the wings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstitutionKind {
    ArtsColleges,
    Schools,
    Madrasas,
}

impl InstitutionKind {
    pub const ALL: [InstitutionKind; 3] = [
        InstitutionKind::ArtsColleges,
        InstitutionKind::Schools,
        InstitutionKind::Madrasas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InstitutionKind::ArtsColleges => "Arts & science colleges",
            InstitutionKind::Schools => "Schools",
            InstitutionKind::Madrasas => "Madrasas",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionMetrics {
    pub count: Count,
    pub students_count: Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionMetricsPatch {
    pub count: Option<Count>,
    pub students_count: Option<Count>,
}

impl InstitutionMetricsPatch {
    pub fn apply(self, target: &mut InstitutionMetrics) {
        if let Some(value) = self.count {
            target.count = value;
        }
        if let Some(value) = self.students_count {
            target.students_count = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionCounts {
    pub arts_colleges: InstitutionMetrics,
    pub schools: InstitutionMetrics,
    pub madrasas: InstitutionMetrics,
}

impl InstitutionCounts {
    pub fn kind(&self, kind: InstitutionKind) -> &InstitutionMetrics {
        match kind {
            InstitutionKind::ArtsColleges => &self.arts_colleges,
            InstitutionKind::Schools => &self.schools,
            InstitutionKind::Madrasas => &self.madrasas,
        }
    }

    pub fn kind_mut(&mut self, kind: InstitutionKind) -> &mut InstitutionMetrics {
        match kind {
            InstitutionKind::ArtsColleges => &mut self.arts_colleges,
            InstitutionKind::Schools => &mut self.schools,
            InstitutionKind::Madrasas => &mut self.madrasas,
        }
    }
}

/// Main-campus tallies. The aggregate `count` is a derived summary the
/// collection form leaves optional; `students_count` is collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampusCounts {
    pub count: Count,
    pub students_count: Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampusCountsPatch {
    pub count: Option<Count>,
    pub students_count: Option<Count>,
}

impl CampusCountsPatch {
    pub fn apply(self, target: &mut CampusCounts) {
        if let Some(value) = self.count {
            target.count = value;
        }
        if let Some(value) = self.students_count {
            target.students_count = value;
        }
    }
}

/// Part B: organizational strength across wings, institutions, and
/// main campuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationCounts {
    pub wings: WingBreakdown,
    pub institutions: InstitutionCounts,
    pub main_campuses: CampusCounts,
}

/// Patch targeting one nested group of part B at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationPatch {
    pub wing: Option<(Wing, WingCountsPatch)>,
    pub institution: Option<(InstitutionKind, InstitutionMetricsPatch)>,
    pub main_campuses: Option<CampusCountsPatch>,
}

impl OrganizationPatch {
    pub fn apply(self, target: &mut OrganizationCounts) {
        if let Some((wing, patch)) = self.wing {
            patch.apply(target.wings.wing_mut(wing));
        }
        if let Some((kind, patch)) = self.institution {
            patch.apply(target.institutions.kind_mut(kind));
        }
        if let Some(patch) = self.main_campuses {
            patch.apply(&mut target.main_campuses);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wing_patch_touches_only_the_named_wing() {
        let mut counts = OrganizationCounts::default();
        counts.wings.jih.members = Some(40);

        OrganizationPatch {
            wing: Some((
                Wing::Sio,
                WingCountsPatch {
                    components: Some(Some(3)),
                    ..WingCountsPatch::default()
                },
            )),
            ..OrganizationPatch::default()
        }
        .apply(&mut counts);

        assert_eq!(counts.wings.sio.components, Some(3));
        assert_eq!(counts.wings.jih.members, Some(40));
        assert_eq!(counts.wings.sio.members, None);
    }

    #[test]
    fn campus_patch_merges_shallowly() {
        let mut counts = OrganizationCounts::default();
        counts.main_campuses.students_count = Some(220);

        OrganizationPatch {
            main_campuses: Some(CampusCountsPatch {
                count: Some(Some(2)),
                ..CampusCountsPatch::default()
            }),
            ..OrganizationPatch::default()
        }
        .apply(&mut counts);

        assert_eq!(counts.main_campuses.count, Some(2));
        assert_eq!(counts.main_campuses.students_count, Some(220));
    }
}
