//! Submission handoff: payload shape, sink contract, and the
//! file-backed sink used by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::SurveyError;
use crate::report::FormKind;

/// Create a new submission, or replace a previously stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SubmissionKind {
    Create,
    Update { id: Uuid },
}

/// Immutable snapshot handed to a sink. The wizard keeps its own
/// record, so a failed submission is retried without re-entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub form: FormKind,
    #[serde(flatten)]
    pub kind: SubmissionKind,
    pub body: Value,
    pub recorded_at: DateTime<Utc>,
}

impl SubmissionPayload {
    pub fn new(form: FormKind, prior: Option<Uuid>, body: Value) -> Self {
        let kind = match prior {
            Some(id) => SubmissionKind::Update { id },
            None => SubmissionKind::Create,
        };
        Self {
            form,
            kind,
            body,
            recorded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub stored_at: DateTime<Utc>,
}

/// Accepts finished records. The HTTP backend implements this on the
/// hosted portal; this crate ships the file-backed variant.
pub trait SubmissionSink {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SurveyError>;
}

/// Stores submissions as pretty-printed JSON files named by id,
/// staged through a temp file so a failed write never clobbers an
/// existing submission.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: PathBuf) -> Result<Self, SurveyError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, form: FormKind, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}_{}.json", form, id))
    }
}

impl SubmissionSink for FileSink {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SurveyError> {
        let id = match payload.kind {
            SubmissionKind::Update { id } => id,
            SubmissionKind::Create => Uuid::new_v4(),
        };
        let path = self.path_for(payload.form, id);
        let json = serde_json::to_string_pretty(payload)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::info!(%id, form = %payload.form, "Submission stored.");
        Ok(SubmissionReceipt {
            id,
            stored_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn create_assigns_a_fresh_id() {
        let temp = tempdir().unwrap();
        let mut sink = FileSink::new(temp.path().to_path_buf()).unwrap();
        let payload = SubmissionPayload::new(FormKind::Annual, None, json!({"district": "X"}));

        let receipt = sink.submit(&payload).unwrap();
        assert!(sink.path_for(FormKind::Annual, receipt.id).exists());
    }

    #[test]
    fn update_reuses_the_prior_id() {
        let temp = tempdir().unwrap();
        let mut sink = FileSink::new(temp.path().to_path_buf()).unwrap();
        let id = Uuid::new_v4();
        let payload =
            SubmissionPayload::new(FormKind::Monthly, Some(id), json!({"month": "2026-07"}));

        let receipt = sink.submit(&payload).unwrap();
        assert_eq!(receipt.id, id);

        let stored: SubmissionPayload =
            serde_json::from_str(&fs::read_to_string(sink.path_for(FormKind::Monthly, id)).unwrap())
                .unwrap();
        assert_eq!(stored.kind, SubmissionKind::Update { id });
        assert_eq!(stored.body["month"], "2026-07");
    }
}
