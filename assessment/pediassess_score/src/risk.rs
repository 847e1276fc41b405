use std::fmt;
use std::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::response::ResponseSet;

/// Frequencies at or above this value are at least [`RiskLevel::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 0.33;
/// Frequencies at or above this value are [`RiskLevel::High`].
pub const HIGH_THRESHOLD: f64 = 0.66;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a yes-frequency. Both thresholds are compared exactly, so
    /// `0.33` is already Medium and `0.66` is already High.
    pub fn from_frequency(frequency: f64) -> Self {
        if frequency < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if frequency < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssessmentResult {
    /// Share of "yes" answers, in `[0, 1]`.
    pub frequency: f64,
    pub risk_level: RiskLevel,
}

/// Share of `true` values, or `0.0` when there are none to count.
pub fn yes_frequency(values: impl IntoIterator<Item = bool>) -> f64 {
    let (yes, total) = values
        .into_iter()
        .fold((0usize, 0usize), |(yes, total), v| {
            (yes + usize::from(v), total + 1)
        });
    if total == 0 {
        0.0
    } else {
        yes as f64 / total as f64
    }
}

/// Score one assessment. The contact-history answer is always part of the
/// tally, next to every entry in `responses`.
pub fn score(responses: &ResponseSet, contact_history: bool) -> AssessmentResult {
    let frequency = yes_frequency(responses.values().chain(iter::once(contact_history)));
    let risk_level = RiskLevel::from_frequency(frequency);
    log::debug!(
        "scored {} responses (contact history: {contact_history}): frequency {frequency:.4} -> {risk_level}",
        responses.len()
    );
    AssessmentResult {
        frequency,
        risk_level,
    }
}
