use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of sub-organizations tabulated across the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Wing {
    Jih,
    Vanitha,
    Solidarity,
    Sio,
    Gio,
    Malarvadi,
    TeenIndia,
}

impl Wing {
    /// All wings, in the order the collection forms present them.
    pub const ALL: [Wing; 7] = [
        Wing::Jih,
        Wing::Vanitha,
        Wing::Solidarity,
        Wing::Sio,
        Wing::Gio,
        Wing::Malarvadi,
        Wing::TeenIndia,
    ];

    /// Human-readable label used by prompts and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Wing::Jih => "JIH",
            Wing::Vanitha => "Vanitha",
            Wing::Solidarity => "Solidarity",
            Wing::Sio => "SIO",
            Wing::Gio => "GIO",
            Wing::Malarvadi => "Malarvadi",
            Wing::TeenIndia => "Teen India",
        }
    }

    /// Wire identifier, matching the stored JSON keys.
    pub fn key(&self) -> &'static str {
        match self {
            Wing::Jih => "jih",
            Wing::Vanitha => "vanitha",
            Wing::Solidarity => "solidarity",
            Wing::Sio => "sio",
            Wing::Gio => "gio",
            Wing::Malarvadi => "malarvadi",
            Wing::TeenIndia => "teenIndia",
        }
    }
}

impl fmt::Display for Wing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
