#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::response::ResponseSet;
use crate::risk::{score, AssessmentResult};

/// Everything the scorer needs for one assessment, captured once at submit
/// time and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssessmentRequest {
    pub responses: ResponseSet,
    pub contact_history: bool,
}

impl AssessmentRequest {
    pub fn new(responses: ResponseSet, contact_history: bool) -> Self {
        Self {
            responses,
            contact_history,
        }
    }

    /// Number of answers that enter the frequency denominator.
    pub fn considered(&self) -> usize {
        self.responses.len() + 1
    }

    /// Number of "yes" answers, contact history included.
    pub fn yes_count(&self) -> usize {
        self.responses.yes_count() + usize::from(self.contact_history)
    }

    pub fn score(&self) -> AssessmentResult {
        score(&self.responses, self.contact_history)
    }
}
