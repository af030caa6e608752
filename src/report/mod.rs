//! Survey report records, patch types, and persistence-friendly helpers.

pub mod annual;
pub mod demographics;
pub mod forums;
pub mod monthly;
pub mod organization;
pub mod projections;
pub mod stored;
pub mod systems;
pub mod wing;

pub use annual::{AnnualPatch, AnnualReport};
pub use demographics::{Demographics, DemographicsPatch, LOCALITY_KINDS};
pub use forums::{ForumCounts, ForumCountsPatch, ForumPlatform, ForumsPatch, PublicForums};
pub use monthly::{
    ActivitySummary, ActivitySummaryPatch, MeetingCounts, MeetingCountsPatch, MonthlyNarrative,
    MonthlyNarrativePatch, MonthlyPatch, MonthlyReport,
};
pub use organization::{
    CampusCounts, CampusCountsPatch, InstitutionCounts, InstitutionKind, InstitutionMetrics,
    InstitutionMetricsPatch, OrganizationCounts, OrganizationPatch, WingBreakdown, WingCounts,
    WingCountsPatch,
};
pub use projections::{GrowthProjections, ProjectionsPatch, WingTargets};
pub use stored::{annual_from_stored, monthly_from_stored, strip_nulls};
pub use systems::{
    HousingCounts, HousingPatch, PublicSystems, PublicSystemsPatch, ZakatCounts, ZakatPatch,
};
pub use wing::Wing;

use serde::{Deserialize, Serialize};

/// A count leaf: `None` means "not yet entered", `Some(0)` means the
/// user entered zero. Raw input never lands here unparsed.
pub type Count = Option<u32>;

/// Which record variant a draft or submission carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Annual,
    Monthly,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Annual => "annual",
            FormKind::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
