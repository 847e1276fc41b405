//! Risk scoring for the pediatric susceptibility assessment.
//!
//! The only computation in the assessment lives here: the share of "yes"
//! answers across the symptom checklist plus the contact-history question,
//! bucketed into [`RiskLevel::Low`], [`RiskLevel::Medium`] or
//! [`RiskLevel::High`].
//!
//! ```
//! use pediassess_score::{score, ResponseSet, RiskLevel};
//!
//! let mut responses = ResponseSet::new();
//! responses.insert("coughing", true);
//!
//! let result = score(&responses, false);
//! assert_eq!(result.frequency, 0.5);
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! ```

pub mod request;
pub mod response;
pub mod risk;

pub use request::AssessmentRequest;
pub use response::ResponseSet;
pub use risk::{
    score, yes_frequency, AssessmentResult, RiskLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD,
};
