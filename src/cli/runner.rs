//! Drives a wizard end to end: render the active step, gate forward
//! navigation on the completion predicate, and hand the finished
//! record to the submission sink.

use serde::Serialize;
use uuid::Uuid;

use crate::cli::{io, output, steps};
use crate::errors::SurveyError;
use crate::report::{AnnualReport, MonthlyReport};
use crate::session::SessionProfile;
use crate::submit::{SubmissionReceipt, SubmissionSink};
use crate::utils::persistence::DraftStore;
use crate::wizard::{FormWizard, SurveyForm};

/// Runs the five-step annual wizard. Returns the receipt on submit,
/// `None` when the user backs out.
pub fn run_annual(
    profile: SessionProfile,
    existing: Option<AnnualReport>,
    prior: Option<Uuid>,
    sink: &mut dyn SubmissionSink,
    drafts: Option<&DraftStore>,
) -> Result<Option<SubmissionReceipt>, SurveyError> {
    let district_locked = profile.has_district();
    let wizard = match existing {
        Some(record) => FormWizard::resume(profile, record),
        None => FormWizard::new(profile),
    };
    drive(
        wizard,
        prior,
        sink,
        drafts,
        steps::annual_step_title,
        &mut |wizard| steps::run_annual_step(wizard, district_locked),
        &|record: &AnnualReport| record.district.clone(),
    )
}

/// Runs the two-step monthly wizard.
pub fn run_monthly(
    profile: SessionProfile,
    existing: Option<MonthlyReport>,
    prior: Option<Uuid>,
    sink: &mut dyn SubmissionSink,
    drafts: Option<&DraftStore>,
) -> Result<Option<SubmissionReceipt>, SurveyError> {
    let district_locked = profile.has_district();
    let wizard = match existing {
        Some(record) => FormWizard::resume(profile, record),
        None => FormWizard::new(profile),
    };
    drive(
        wizard,
        prior,
        sink,
        drafts,
        steps::monthly_step_title,
        &mut |wizard| steps::run_monthly_step(wizard, district_locked),
        &|record: &MonthlyReport| format!("{} {}", record.district, record.month),
    )
}

fn drive<F: SurveyForm + Serialize>(
    mut wizard: FormWizard<F>,
    prior: Option<Uuid>,
    sink: &mut dyn SubmissionSink,
    drafts: Option<&DraftStore>,
    title: fn(usize) -> &'static str,
    render: &mut dyn FnMut(&mut FormWizard<F>) -> Result<(), SurveyError>,
    draft_name: &dyn Fn(&F) -> String,
) -> Result<Option<SubmissionReceipt>, SurveyError> {
    loop {
        output::section(format!(
            "Step {} of {}: {}",
            wizard.step(),
            wizard.step_count(),
            title(wizard.step())
        ));
        render(&mut wizard)?;

        let complete = wizard.current_step_complete();
        if !complete {
            output::warning("Some required fields are still blank.");
        }

        let forward = if wizard.is_last_step() {
            "Submit"
        } else {
            "Next step"
        };
        let mut items: Vec<String> = Vec::new();
        if complete {
            items.push(forward.into());
        }
        items.push("Edit this step again".into());
        if !wizard.is_first_step() {
            items.push("Previous step".into());
        }
        items.push("Cancel".into());

        let choice = io::prompt_menu("What next?", &items)?;
        match items[choice].as_str() {
            "Next step" => {
                wizard.next_step();
            }
            "Previous step" => {
                wizard.prev_step();
            }
            "Edit this step again" => {}
            "Submit" => {
                if !wizard.all_steps_complete() {
                    output::warning("Earlier steps still have blank required fields.");
                    continue;
                }
                let payload = wizard.payload(prior)?;
                match sink.submit(&payload) {
                    Ok(receipt) => {
                        output::success(format!("Submission stored as {}.", receipt.id));
                        return Ok(Some(receipt));
                    }
                    Err(err) => {
                        // The record is untouched; the user may retry.
                        output::error(format!("Submission failed: {err}"));
                    }
                }
            }
            _ => {
                if let Some(store) = drafts {
                    if io::confirm("Save a draft before leaving?", true)? {
                        let name = draft_name(wizard.record());
                        let path = store.save(F::kind(), &name, wizard.record())?;
                        output::info(format!("Draft saved to {}.", path.display()));
                    }
                }
                return Ok(None);
            }
        }
    }
}
