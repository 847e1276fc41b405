use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Oldest age accepted by the pediatric form.
pub const MAX_AGE: u8 = 18;

/// Demographics echoed back with the result. None of it affects the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInfo {
    pub name: String,
    pub region: String,
    pub age: u8,
    /// Body temperature as entered; the unit is whatever the clinic uses.
    pub temperature: f64,
}

impl PatientInfo {
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.age > MAX_AGE {
            return Err(IntakeError::AgeOutOfRange(i64::from(self.age)));
        }
        if !self.temperature.is_finite() {
            return Err(IntakeError::NonFiniteTemperature);
        }
        Ok(())
    }
}

/// Range-check an age as typed on the form.
pub fn checked_age(age: i64) -> Result<u8, IntakeError> {
    u8::try_from(age)
        .ok()
        .filter(|a| *a <= MAX_AGE)
        .ok_or(IntakeError::AgeOutOfRange(age))
}
