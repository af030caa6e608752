use serde::{Deserialize, Serialize};

use super::{
    Demographics, DemographicsPatch, ForumsPatch, GrowthProjections, OrganizationCounts,
    OrganizationPatch, ProjectionsPatch, PublicForums, PublicSystems, PublicSystemsPatch,
};

/// The full annual submission: one district, five parts.
///
/// Wire names match the stored submission format (`partA`..`partE`,
/// camelCase leaves). Every field defaults, so partially-shaped legacy
/// records deserialize with type-correct gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualReport {
    pub district: String,
    #[serde(rename = "partA")]
    pub demographics: Demographics,
    #[serde(rename = "partB")]
    pub organization: OrganizationCounts,
    #[serde(rename = "partC")]
    pub forums: PublicForums,
    #[serde(rename = "partD")]
    pub systems: PublicSystems,
    #[serde(rename = "partE")]
    pub projections: GrowthProjections,
}

/// The sanctioned mutation unit: one part-scoped patch, or a direct
/// replacement of the top-level district scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnualPatch {
    District(String),
    Demographics(DemographicsPatch),
    Organization(OrganizationPatch),
    Forums(ForumsPatch),
    Systems(PublicSystemsPatch),
    Projections(ProjectionsPatch),
}

impl AnnualReport {
    pub fn apply(&mut self, patch: AnnualPatch) {
        match patch {
            AnnualPatch::District(district) => self.district = district,
            AnnualPatch::Demographics(patch) => patch.apply(&mut self.demographics),
            AnnualPatch::Organization(patch) => patch.apply(&mut self.organization),
            AnnualPatch::Forums(patch) => patch.apply(&mut self.forums),
            AnnualPatch::Systems(patch) => patch.apply(&mut self.systems),
            AnnualPatch::Projections(patch) => patch.apply(&mut self.projections),
        }
    }
}
