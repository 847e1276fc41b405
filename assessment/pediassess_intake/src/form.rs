use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use pediassess_score::{AssessmentRequest, ResponseSet};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::patient::PatientInfo;
use crate::symptom::{Answer, Symptom};

/// How skipped symptom questions enter the score.
///
/// The contact-history question is not affected: when skipped it always
/// counts as "no".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnansweredPolicy {
    /// Leave skipped symptoms out of the tally; the denominator shrinks.
    #[default]
    Omit,
    /// Count skipped symptoms as "no".
    CountAsNo,
}

impl FromStr for UnansweredPolicy {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "omit" | "skip" => Ok(UnansweredPolicy::Omit),
            "no" | "count-as-no" => Ok(UnansweredPolicy::CountAsNo),
            _ => Err(IntakeError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for UnansweredPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnansweredPolicy::Omit => "omit",
            UnansweredPolicy::CountAsNo => "count-as-no",
        })
    }
}

/// A completed (or partially completed) assessment form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub patient: PatientInfo,
    pub symptoms: BTreeMap<Symptom, Answer>,
    pub contact_history: Answer,
}

impl IntakeForm {
    pub fn new(patient: PatientInfo) -> Self {
        Self {
            patient,
            ..Self::default()
        }
    }

    pub fn set_symptom(&mut self, symptom: Symptom, answer: Answer) {
        self.symptoms.insert(symptom, answer);
    }

    pub fn answer(&self, symptom: Symptom) -> Answer {
        self.symptoms.get(&symptom).copied().unwrap_or_default()
    }

    pub fn answered_symptoms(&self) -> usize {
        self.symptoms.values().filter(|a| a.is_answered()).count()
    }

    /// Freeze the form into the request handed to the scorer.
    pub fn to_request(&self, policy: UnansweredPolicy) -> AssessmentRequest {
        let mut responses = ResponseSet::new();
        for symptom in Symptom::ALL {
            let value = match (self.answer(symptom).as_bool(), policy) {
                (Some(v), _) => v,
                (None, UnansweredPolicy::CountAsNo) => false,
                (None, UnansweredPolicy::Omit) => continue,
            };
            responses.insert(symptom.key(), value);
        }
        let contact_history = self.contact_history.as_bool().unwrap_or(false);
        log::debug!(
            "built request with {} of {} symptoms (policy: {policy})",
            responses.len(),
            Symptom::ALL.len()
        );
        AssessmentRequest::new(responses, contact_history)
    }
}
