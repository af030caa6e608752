use serde::{Deserialize, Serialize};

use super::Count;

/// Locality classifications offered by the demographics step.
pub const LOCALITY_KINDS: [&str; 3] = ["Panchayat", "Municipality", "Corporation"];

/// Part A: population and household figures for the reporting area.
///
/// `muslim_percentage` is stored as entered text (a cleaned digit/dot
/// string) rather than a parsed number, matching the stored format of
/// prior submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Demographics {
    pub locality_kind: String,
    pub total_population: Count,
    pub muslim_population: Count,
    pub households: Count,
    pub mahallu_count: Count,
    pub muslim_percentage: Option<String>,
}

/// Shallow-merge patch for [`Demographics`]: present fields override,
/// absent fields leave the prior value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemographicsPatch {
    pub locality_kind: Option<String>,
    pub total_population: Option<Count>,
    pub muslim_population: Option<Count>,
    pub households: Option<Count>,
    pub mahallu_count: Option<Count>,
    pub muslim_percentage: Option<Option<String>>,
}

impl DemographicsPatch {
    pub fn apply(self, target: &mut Demographics) {
        if let Some(value) = self.locality_kind {
            target.locality_kind = value;
        }
        if let Some(value) = self.total_population {
            target.total_population = value;
        }
        if let Some(value) = self.muslim_population {
            target.muslim_population = value;
        }
        if let Some(value) = self.households {
            target.households = value;
        }
        if let Some(value) = self.mahallu_count {
            target.mahallu_count = value;
        }
        if let Some(value) = self.muslim_percentage {
            target.muslim_percentage = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overrides_only_present_fields() {
        let mut part = Demographics {
            locality_kind: "Panchayat".into(),
            total_population: Some(1200),
            ..Demographics::default()
        };

        DemographicsPatch {
            total_population: Some(Some(50_000)),
            ..DemographicsPatch::default()
        }
        .apply(&mut part);

        assert_eq!(part.total_population, Some(50_000));
        assert_eq!(part.locality_kind, "Panchayat");
        assert_eq!(part.households, None);
    }

    #[test]
    fn patch_can_clear_a_leaf_back_to_unentered() {
        let mut part = Demographics {
            muslim_population: Some(300),
            ..Demographics::default()
        };

        DemographicsPatch {
            muslim_population: Some(None),
            ..DemographicsPatch::default()
        }
        .apply(&mut part);

        assert_eq!(part.muslim_population, None);
    }
}
