//! Intake form for the pediatric susceptibility assessment.
//!
//! An [`IntakeForm`] is the explicit, immutable snapshot of everything a
//! clinician entered: patient demographics, one [`Answer`] per [`Symptom`]
//! and the contact-history answer. It can be built in code, deserialized
//! from JSON, or parsed from a plain-text intake sheet:
//!
//! ```text
//! # triage desk, morning shift
//! name: Ana Lopez
//! region: Oaxaca
//! age: 7
//! temperature: 38.4
//! coughing: yes
//! diarrhea: no
//! contact history: no
//! ```

pub mod error;
pub mod form;
pub mod patient;
pub mod sheet;
pub mod symptom;

pub use error::IntakeError;
pub use form::{IntakeForm, UnansweredPolicy};
pub use patient::{checked_age, PatientInfo, MAX_AGE};
pub use sheet::parse_intake_sheet;
pub use symptom::{Answer, Symptom, CONTACT_HISTORY_QUESTION};

/// Load a completed form from either JSON (an object) or an intake sheet.
pub fn load_intake(text: &str) -> Result<IntakeForm, IntakeError> {
    if text.trim_start().starts_with('{') {
        log::debug!("loading intake as JSON");
        serde_json::from_str(text).map_err(|e| IntakeError::Json(e.to_string()))
    } else {
        log::debug!("loading intake as sheet");
        parse_intake_sheet(text)
    }
}
