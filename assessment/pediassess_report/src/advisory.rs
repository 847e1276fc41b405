use pediassess_score::RiskLevel;
use serde::{Deserialize, Serialize};

pub const CLOSING_LINE: &str =
    "Thank you for using the Pediatric Patient Susceptibility Assessment tool.";

/// How loudly a result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl From<RiskLevel> for Severity {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Severity::Success,
            RiskLevel::Medium => Severity::Warning,
            RiskLevel::High => Severity::Error,
        }
    }
}

pub fn advisory(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Low Risk indicates a low risk of being infected by endemic diseases."
        }
        RiskLevel::Medium => {
            "Medium Risk indicates that you are moderately susceptible to being infected by \
             endemic diseases. Please notify a healthcare professional if more symptoms start \
             presenting themselves."
        }
        RiskLevel::High => {
            "High Risk indicates a high risk of being infected by endemic diseases. If not \
             already, please inform a healthcare professional in your local area."
        }
    }
}
