//! Multi-step wizard controller for survey records.
//!
//! One `FormWizard` instance owns exactly one in-progress record and
//! its 1-based step cursor. `update` is the only sanctioned mutation
//! path; navigation is clamped to the form's step range and never
//! consults validation itself. Callers check
//! [`FormWizard::current_step_complete`] before advancing and keep the
//! user on the step otherwise.

pub mod validation;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::SurveyError;
use crate::report::{AnnualPatch, AnnualReport, FormKind, MonthlyPatch, MonthlyReport};
use crate::session::SessionProfile;
use crate::submit::SubmissionPayload;

/// A record variant the wizard can drive: a fixed step count, a typed
/// patch language, and a pure per-step completion predicate.
pub trait SurveyForm: Default {
    type Patch;

    const STEPS: usize;

    fn kind() -> FormKind;

    /// Applies one patch. Total; never validates.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Adopts the session's district when the record has none yet.
    fn prefill(&mut self, profile: &SessionProfile);

    /// Pure function of the record; `step` is 1-based.
    fn step_complete(&self, step: usize) -> bool;
}

impl SurveyForm for AnnualReport {
    type Patch = AnnualPatch;

    const STEPS: usize = 5;

    fn kind() -> FormKind {
        FormKind::Annual
    }

    fn apply_patch(&mut self, patch: AnnualPatch) {
        self.apply(patch);
    }

    fn prefill(&mut self, profile: &SessionProfile) {
        if !validation::text_present(&self.district) && profile.has_district() {
            self.district = profile.district.clone().unwrap_or_default();
        }
    }

    fn step_complete(&self, step: usize) -> bool {
        match step {
            1 => validation::demographics_complete(&self.district, &self.demographics),
            2 => validation::organization_complete(&self.organization),
            3 => validation::forums_complete(&self.forums),
            4 => validation::systems_complete(&self.systems),
            5 => validation::projections_complete(&self.projections),
            _ => false,
        }
    }
}

impl SurveyForm for MonthlyReport {
    type Patch = MonthlyPatch;

    const STEPS: usize = 2;

    fn kind() -> FormKind {
        FormKind::Monthly
    }

    fn apply_patch(&mut self, patch: MonthlyPatch) {
        self.apply(patch);
    }

    fn prefill(&mut self, profile: &SessionProfile) {
        if !validation::text_present(&self.district) && profile.has_district() {
            self.district = profile.district.clone().unwrap_or_default();
        }
    }

    fn step_complete(&self, step: usize) -> bool {
        match step {
            1 => validation::monthly_scope_complete(self),
            // Narrative step: every field optional.
            2 => true,
            _ => false,
        }
    }
}

/// Owns one in-progress record and its step cursor.
#[derive(Debug, Clone)]
pub struct FormWizard<F: SurveyForm> {
    record: F,
    step: usize,
    profile: SessionProfile,
}

impl<F: SurveyForm> FormWizard<F> {
    /// Fresh all-defaults record with the session's district adopted.
    pub fn new(profile: SessionProfile) -> Self {
        let mut record = F::default();
        record.prefill(&profile);
        Self {
            record,
            step: 1,
            profile,
        }
    }

    /// Adopts an already-normalized stored record for editing.
    pub fn resume(profile: SessionProfile, record: F) -> Self {
        Self {
            record,
            step: 1,
            profile,
        }
    }

    pub fn record(&self) -> &F {
        &self.record
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        F::STEPS
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.step == F::STEPS
    }

    /// The only mutation path for the record's parts.
    pub fn update(&mut self, patch: F::Patch) {
        self.record.apply_patch(patch);
    }

    /// Wholesale replacement; the caller normalizes beforehand.
    pub fn set_record(&mut self, record: F) {
        self.record = record;
    }

    /// Advances the cursor, clamped to the last step. No-op there.
    pub fn next_step(&mut self) -> usize {
        if self.step < F::STEPS {
            self.step += 1;
        }
        self.step
    }

    /// Decrements the cursor, clamped to the first step.
    pub fn prev_step(&mut self) -> usize {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Back to an all-defaults record (session prefill re-applied) and
    /// the first step.
    pub fn reset(&mut self) {
        let mut record = F::default();
        record.prefill(&self.profile);
        self.record = record;
        self.step = 1;
    }

    pub fn current_step_complete(&self) -> bool {
        self.record.step_complete(self.step)
    }

    /// Whether every step would pass its own gate; checked once more
    /// before handing the record to the sink.
    pub fn all_steps_complete(&self) -> bool {
        (1..=F::STEPS).all(|step| self.record.step_complete(step))
    }
}

impl<F: SurveyForm + Serialize> FormWizard<F> {
    /// Immutable snapshot for the submission sink. The wizard's own
    /// record is untouched so a failed submission can be retried.
    pub fn payload(&self, prior: Option<Uuid>) -> Result<SubmissionPayload, SurveyError> {
        Ok(SubmissionPayload::new(
            F::kind(),
            prior,
            serde_json::to_value(&self.record)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DemographicsPatch;

    #[test]
    fn cursor_clamps_at_both_boundaries() {
        let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
        assert_eq!(wizard.prev_step(), 1);
        assert_eq!(wizard.prev_step(), 1);

        for _ in 0..10 {
            wizard.next_step();
        }
        assert_eq!(wizard.step(), 5);
        assert_eq!(wizard.next_step(), 5);
    }

    #[test]
    fn reset_restores_defaults_and_first_step() {
        let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
        wizard.update(AnnualPatch::District("Kollam".into()));
        wizard.next_step();
        wizard.reset();

        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.record(), &AnnualReport::default());
    }

    #[test]
    fn reset_keeps_the_session_district() {
        let mut wizard: FormWizard<AnnualReport> =
            FormWizard::new(SessionProfile::for_district("Malappuram"));
        wizard.update(AnnualPatch::District("Kollam".into()));
        wizard.reset();
        assert_eq!(wizard.record().district, "Malappuram");
    }

    #[test]
    fn prefill_does_not_override_an_existing_district() {
        let mut record = AnnualReport::default();
        record.district = "Kannur".into();
        record.prefill(&SessionProfile::for_district("Malappuram"));
        assert_eq!(record.district, "Kannur");
    }

    #[test]
    fn predicate_is_stable_between_mutations() {
        let wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
        assert_eq!(
            wizard.current_step_complete(),
            wizard.current_step_complete()
        );
    }

    #[test]
    fn update_merges_into_the_named_part_only() {
        let mut wizard: FormWizard<AnnualReport> = FormWizard::new(SessionProfile::anonymous());
        wizard.update(AnnualPatch::Demographics(DemographicsPatch {
            total_population: Some(Some(50_000)),
            ..DemographicsPatch::default()
        }));

        let part = &wizard.record().demographics;
        assert_eq!(part.total_population, Some(50_000));
        assert_eq!(part.muslim_population, None);
        assert_eq!(part.locality_kind, "");
    }

    #[test]
    fn monthly_scope_gates_step_one_only() {
        let mut wizard: FormWizard<MonthlyReport> = FormWizard::new(SessionProfile::anonymous());
        assert!(!wizard.current_step_complete());

        wizard.update(MonthlyPatch::District("Palakkad".into()));
        wizard.update(MonthlyPatch::Month("2026-07".into()));
        assert!(wizard.current_step_complete());

        wizard.next_step();
        // Narrative step never gates.
        assert!(wizard.current_step_complete());
        assert!(wizard.all_steps_complete());
    }
}
