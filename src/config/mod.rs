use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::SurveyError;
use crate::session::SessionProfile;
use crate::utils::{ensure_dir, resolve_base};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Portal-side preferences remembered between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            district: None,
            district_id: None,
            data_dir: None,
        }
    }
}

impl PortalConfig {
    /// The session identity this configuration implies.
    pub fn session_profile(&self) -> SessionProfile {
        SessionProfile {
            district: self.district.clone(),
            district_id: self.district_id.clone(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, SurveyError> {
        Self::from_base(resolve_base(None))
    }

    /// Base-dir override used by tests and tooling.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, SurveyError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, SurveyError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<PortalConfig, SurveyError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(PortalConfig::default())
        }
    }

    pub fn save(&self, config: &PortalConfig) -> Result<(), SurveyError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
