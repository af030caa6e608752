use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde::Serialize;

use crate::errors::SurveyError;
use crate::report::{annual_from_stored, monthly_from_stored, AnnualReport, FormKind, MonthlyReport};
use crate::utils::{ensure_dir, resolve_base};

/// Writes the provided record to disk atomically by staging to a
/// temporary file.
pub fn save_record_to_file<T: Serialize>(record: &T, path: &Path) -> Result<(), SurveyError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads an annual report from disk, normalizing legacy shapes.
pub fn load_annual_from_file(path: &Path) -> Result<AnnualReport, SurveyError> {
    let data = fs::read_to_string(path)?;
    annual_from_stored(serde_json::from_str(&data)?)
}

/// Loads a monthly return from disk, normalizing legacy shapes.
pub fn load_monthly_from_file(path: &Path) -> Result<MonthlyReport, SurveyError> {
    let data = fs::read_to_string(path)?;
    monthly_from_stored(serde_json::from_str(&data)?)
}

/// Named in-progress drafts under the app data dir, one JSON file per
/// form kind and draft name.
#[derive(Debug, Clone)]
pub struct DraftStore {
    drafts_dir: PathBuf,
}

impl DraftStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self, SurveyError> {
        let drafts_dir = resolve_base(root).join("drafts");
        ensure_dir(&drafts_dir)?;
        Ok(Self { drafts_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.drafts_dir
    }

    fn path_for(&self, form: FormKind, name: &str) -> PathBuf {
        self.drafts_dir
            .join(format!("{}_{}.json", form.as_str(), sanitize_name(name)))
    }

    pub fn save<T: Serialize>(
        &self,
        form: FormKind,
        name: &str,
        record: &T,
    ) -> Result<PathBuf, SurveyError> {
        let path = self.path_for(form, name);
        save_record_to_file(record, &path)?;
        tracing::debug!(draft = name, form = %form, "Draft saved.");
        Ok(path)
    }

    pub fn load_annual(&self, name: &str) -> Result<AnnualReport, SurveyError> {
        load_annual_from_file(&self.existing_path(FormKind::Annual, name)?)
    }

    pub fn load_monthly(&self, name: &str) -> Result<MonthlyReport, SurveyError> {
        load_monthly_from_file(&self.existing_path(FormKind::Monthly, name)?)
    }

    pub fn remove(&self, form: FormKind, name: &str) -> Result<(), SurveyError> {
        let path = self.existing_path(form, name)?;
        fs::remove_file(path)?;
        Ok(())
    }

    /// Draft names for one form kind, newest first.
    pub fn list(&self, form: FormKind) -> Result<Vec<String>, SurveyError> {
        let prefix = format!("{}_", form.as_str());
        let mut entries: Vec<(String, SystemTime)> = Vec::new();
        for entry in fs::read_dir(&self.drafts_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Some(name) = stem.strip_prefix(&prefix) else {
                continue;
            };
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push((name.to_string(), modified));
        }
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(entries.into_iter().map(|(name, _)| name).collect())
    }

    fn existing_path(&self, form: FormKind, name: &str) -> Result<PathBuf, SurveyError> {
        let path = self.path_for(form, name);
        if !path.exists() {
            return Err(SurveyError::DraftNotFound(format!(
                "{} draft `{}`",
                form, name
            )));
        }
        Ok(path)
    }
}

fn sanitize_name(name: &str) -> String {
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-');
    if trimmed.is_empty() {
        "draft".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_separators() {
        assert_eq!(sanitize_name("North Kerala / 2026"), "north-kerala-2026");
        assert_eq!(sanitize_name("  "), "draft");
    }
}
