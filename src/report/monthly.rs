use serde::{Deserialize, Serialize};

use super::Count;

/// Part A of the monthly return: headline activity figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitySummary {
    pub programs_held: Count,
    pub total_attendance: Count,
    pub new_contacts: Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySummaryPatch {
    pub programs_held: Option<Count>,
    pub total_attendance: Option<Count>,
    pub new_contacts: Option<Count>,
}

impl ActivitySummaryPatch {
    pub fn apply(self, target: &mut ActivitySummary) {
        if let Some(value) = self.programs_held {
            target.programs_held = value;
        }
        if let Some(value) = self.total_attendance {
            target.total_attendance = value;
        }
        if let Some(value) = self.new_contacts {
            target.new_contacts = value;
        }
    }
}

/// Part B of the monthly return: meeting cadence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingCounts {
    pub committee_meetings: Count,
    pub general_body_meetings: Count,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingCountsPatch {
    pub committee_meetings: Option<Count>,
    pub general_body_meetings: Option<Count>,
    pub remarks: Option<String>,
}

impl MeetingCountsPatch {
    pub fn apply(self, target: &mut MeetingCounts) {
        if let Some(value) = self.committee_meetings {
            target.committee_meetings = value;
        }
        if let Some(value) = self.general_body_meetings {
            target.general_body_meetings = value;
        }
        if let Some(value) = self.remarks {
            target.remarks = value;
        }
    }
}

/// Part F of the monthly return: narrative sections, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyNarrative {
    pub highlights: String,
    pub challenges: String,
    pub next_month_plan: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyNarrativePatch {
    pub highlights: Option<String>,
    pub challenges: Option<String>,
    pub next_month_plan: Option<String>,
}

impl MonthlyNarrativePatch {
    pub fn apply(self, target: &mut MonthlyNarrative) {
        if let Some(value) = self.highlights {
            target.highlights = value;
        }
        if let Some(value) = self.challenges {
            target.challenges = value;
        }
        if let Some(value) = self.next_month_plan {
            target.next_month_plan = value;
        }
    }
}

/// The monthly district return: scope (district + month) plus three
/// wire parts presented across two wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyReport {
    pub district: String,
    pub month: String,
    #[serde(rename = "partA")]
    pub activities: ActivitySummary,
    #[serde(rename = "partB")]
    pub meetings: MeetingCounts,
    #[serde(rename = "partF")]
    pub narrative: MonthlyNarrative,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonthlyPatch {
    District(String),
    Month(String),
    Activities(ActivitySummaryPatch),
    Meetings(MeetingCountsPatch),
    Narrative(MonthlyNarrativePatch),
}

impl MonthlyReport {
    pub fn apply(&mut self, patch: MonthlyPatch) {
        match patch {
            MonthlyPatch::District(district) => self.district = district,
            MonthlyPatch::Month(month) => self.month = month,
            MonthlyPatch::Activities(patch) => patch.apply(&mut self.activities),
            MonthlyPatch::Meetings(patch) => patch.apply(&mut self.meetings),
            MonthlyPatch::Narrative(patch) => patch.apply(&mut self.narrative),
        }
    }
}
