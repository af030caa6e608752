use serde::{Deserialize, Serialize};

use super::Count;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HousingCounts {
    pub built: Count,
    pub repaired: Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HousingPatch {
    pub built: Option<Count>,
    pub repaired: Option<Count>,
}

impl HousingPatch {
    pub fn apply(self, target: &mut HousingCounts) {
        if let Some(value) = self.built {
            target.built = value;
        }
        if let Some(value) = self.repaired {
            target.repaired = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZakatCounts {
    pub collected_families: Count,
    pub disbursed_families: Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZakatPatch {
    pub collected_families: Option<Count>,
    pub disbursed_families: Option<Count>,
}

impl ZakatPatch {
    pub fn apply(self, target: &mut ZakatCounts) {
        if let Some(value) = self.collected_families {
            target.collected_families = value;
        }
        if let Some(value) = self.disbursed_families {
            target.disbursed_families = value;
        }
    }
}

/// Part D: welfare-system reach, flat counts plus two nested groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicSystems {
    pub ration_kits: Count,
    pub medical_aid: Count,
    pub education_aid: Count,
    pub water_projects: Count,
    pub housing: HousingCounts,
    pub zakat: ZakatCounts,
    pub interest_free_fund_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicSystemsPatch {
    pub ration_kits: Option<Count>,
    pub medical_aid: Option<Count>,
    pub education_aid: Option<Count>,
    pub water_projects: Option<Count>,
    pub housing: Option<HousingPatch>,
    pub zakat: Option<ZakatPatch>,
    pub interest_free_fund_active: Option<bool>,
}

impl PublicSystemsPatch {
    pub fn apply(self, target: &mut PublicSystems) {
        if let Some(value) = self.ration_kits {
            target.ration_kits = value;
        }
        if let Some(value) = self.medical_aid {
            target.medical_aid = value;
        }
        if let Some(value) = self.education_aid {
            target.education_aid = value;
        }
        if let Some(value) = self.water_projects {
            target.water_projects = value;
        }
        if let Some(patch) = self.housing {
            patch.apply(&mut target.housing);
        }
        if let Some(patch) = self.zakat {
            patch.apply(&mut target.zakat);
        }
        if let Some(value) = self.interest_free_fund_active {
            target.interest_free_fund_active = value;
        }
    }
}
