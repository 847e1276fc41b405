use pediassess_intake::{IntakeError, IntakeForm, PatientInfo, UnansweredPolicy};
use pediassess_score::AssessmentResult;
use serde::Serialize;

use crate::advisory::{advisory, Severity};

/// Everything displayed after the form is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub patient: PatientInfo,
    pub result: AssessmentResult,
    pub severity: Severity,
    pub advisory: &'static str,
    pub responses_considered: usize,
    pub yes_responses: usize,
    pub unanswered_policy: UnansweredPolicy,
}

/// Handle a form submission: validate, score, and attach the advisory.
pub fn submit(
    form: &IntakeForm,
    policy: UnansweredPolicy,
) -> Result<AssessmentReport, IntakeError> {
    form.patient.validate()?;
    let request = form.to_request(policy);
    let result = request.score();
    log::info!(
        "assessment: {} of {} responses were yes, {}",
        request.yes_count(),
        request.considered(),
        result.risk_level
    );
    Ok(AssessmentReport {
        patient: form.patient.clone(),
        severity: Severity::from(result.risk_level),
        advisory: advisory(result.risk_level),
        responses_considered: request.considered(),
        yes_responses: request.yes_count(),
        unanswered_policy: policy,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pediassess_intake::{Answer, Symptom};
    use pediassess_score::RiskLevel;

    #[test]
    fn submit_scores_and_echoes_patient() {
        let mut form = IntakeForm::new(PatientInfo {
            name: "Kofi".into(),
            region: "Ashanti".into(),
            age: 4,
            temperature: 37.5,
        });
        form.set_symptom(Symptom::Coughing, Answer::Yes);
        form.contact_history = Answer::No;

        let report = submit(&form, UnansweredPolicy::Omit).unwrap();
        assert_eq!(report.patient.name, "Kofi");
        assert_eq!(report.result.frequency, 0.5);
        assert_eq!(report.result.risk_level, RiskLevel::Medium);
        assert_eq!(report.severity, Severity::Warning);
        assert_eq!(report.responses_considered, 2);
        assert_eq!(report.yes_responses, 1);
    }

    #[test]
    fn invalid_patient_is_rejected_before_scoring() {
        let form = IntakeForm::new(PatientInfo {
            age: 30,
            ..PatientInfo::default()
        });
        assert_eq!(
            submit(&form, UnansweredPolicy::Omit).unwrap_err(),
            IntakeError::AgeOutOfRange(30)
        );
    }
}
