use serde::{Deserialize, Serialize};

use super::Count;

/// Public-forum platforms tabulated in part C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForumPlatform {
    Palliative,
    Neighbourhood,
    Youth,
    Women,
    Students,
}

impl ForumPlatform {
    pub const ALL: [ForumPlatform; 5] = [
        ForumPlatform::Palliative,
        ForumPlatform::Neighbourhood,
        ForumPlatform::Youth,
        ForumPlatform::Women,
        ForumPlatform::Students,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ForumPlatform::Palliative => "Palliative networks",
            ForumPlatform::Neighbourhood => "Neighbourhood groups",
            ForumPlatform::Youth => "Youth forums",
            ForumPlatform::Women => "Women's forums",
            ForumPlatform::Students => "Student forums",
        }
    }
}

/// Tallies for one platform. `remarks` is free text and never gates
/// step completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumCounts {
    pub count: Count,
    pub cooperating_others: Count,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumCountsPatch {
    pub count: Option<Count>,
    pub cooperating_others: Option<Count>,
    pub remarks: Option<String>,
}

impl ForumCountsPatch {
    pub fn apply(self, target: &mut ForumCounts) {
        if let Some(value) = self.count {
            target.count = value;
        }
        if let Some(value) = self.cooperating_others {
            target.cooperating_others = value;
        }
        if let Some(value) = self.remarks {
            target.remarks = value;
        }
    }
}

/// Part C: participation counts across the public-forum platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicForums {
    pub palliative: ForumCounts,
    pub neighbourhood: ForumCounts,
    pub youth: ForumCounts,
    pub women: ForumCounts,
    pub students: ForumCounts,
}

impl PublicForums {
    pub fn platform(&self, platform: ForumPlatform) -> &ForumCounts {
        match platform {
            ForumPlatform::Palliative => &self.palliative,
            ForumPlatform::Neighbourhood => &self.neighbourhood,
            ForumPlatform::Youth => &self.youth,
            ForumPlatform::Women => &self.women,
            ForumPlatform::Students => &self.students,
        }
    }

    pub fn platform_mut(&mut self, platform: ForumPlatform) -> &mut ForumCounts {
        match platform {
            ForumPlatform::Palliative => &mut self.palliative,
            ForumPlatform::Neighbourhood => &mut self.neighbourhood,
            ForumPlatform::Youth => &mut self.youth,
            ForumPlatform::Women => &mut self.women,
            ForumPlatform::Students => &mut self.students,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumsPatch {
    pub platform: Option<(ForumPlatform, ForumCountsPatch)>,
}

impl ForumsPatch {
    pub fn apply(self, target: &mut PublicForums) {
        if let Some((platform, patch)) = self.platform {
            patch.apply(target.platform_mut(platform));
        }
    }
}
