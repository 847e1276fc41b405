//! Turning a submitted intake form into the assessment shown to the
//! clinician.

pub mod advisory;
pub mod render;
pub mod report;

pub use advisory::{advisory, Severity, CLOSING_LINE};
pub use render::{render_json, render_text};
pub use report::{submit, AssessmentReport};
