use serde::{Deserialize, Serialize};

use super::{Count, Wing};

/// Per-wing six-month formation targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WingTargets {
    pub jih: Count,
    pub vanitha: Count,
    pub solidarity: Count,
    pub sio: Count,
    pub gio: Count,
    pub malarvadi: Count,
    pub teen_india: Count,
}

impl WingTargets {
    pub fn get(&self, wing: Wing) -> Count {
        match wing {
            Wing::Jih => self.jih,
            Wing::Vanitha => self.vanitha,
            Wing::Solidarity => self.solidarity,
            Wing::Sio => self.sio,
            Wing::Gio => self.gio,
            Wing::Malarvadi => self.malarvadi,
            Wing::TeenIndia => self.teen_india,
        }
    }

    pub fn set(&mut self, wing: Wing, value: Count) {
        match wing {
            Wing::Jih => self.jih = value,
            Wing::Vanitha => self.vanitha = value,
            Wing::Solidarity => self.solidarity = value,
            Wing::Sio => self.sio = value,
            Wing::Gio => self.gio = value,
            Wing::Malarvadi => self.malarvadi = value,
            Wing::TeenIndia => self.teen_india = value,
        }
    }
}

/// Part E: free-text growth outlook plus numeric expansion targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthProjections {
    pub vision: String,
    pub focus_areas: String,
    pub new_members_target: Count,
    pub new_workers_target: Count,
    pub components_to_form_in_6_months: WingTargets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionsPatch {
    pub vision: Option<String>,
    pub focus_areas: Option<String>,
    pub new_members_target: Option<Count>,
    pub new_workers_target: Option<Count>,
    pub component_target: Option<(Wing, Count)>,
}

impl ProjectionsPatch {
    pub fn apply(self, target: &mut GrowthProjections) {
        if let Some(value) = self.vision {
            target.vision = value;
        }
        if let Some(value) = self.focus_areas {
            target.focus_areas = value;
        }
        if let Some(value) = self.new_members_target {
            target.new_members_target = value;
        }
        if let Some(value) = self.new_workers_target {
            target.new_workers_target = value;
        }
        if let Some((wing, value)) = self.component_target {
            target.components_to_form_in_6_months.set(wing, value);
        }
    }
}
