use serde::{Deserialize, Serialize};

/// Identity supplied to a wizard at construction time.
///
/// District-scoped sign-ins carry their district so the record's scope
/// is prefilled; state-level and anonymous sessions leave it empty and
/// the user picks a district interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionProfile {
    pub district: Option<String>,
    pub district_id: Option<String>,
}

impl SessionProfile {
    /// A session with no scoped identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_district(district: impl Into<String>) -> Self {
        Self {
            district: Some(district.into()),
            district_id: None,
        }
    }

    /// Whether this session carries a district the record should adopt.
    pub fn has_district(&self) -> bool {
        self.district
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }
}
