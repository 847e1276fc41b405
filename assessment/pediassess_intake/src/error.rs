use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("line {line}: expected `field: value`, found `{text}`")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: unknown field `{field}`")]
    UnknownField { line: usize, field: String },

    #[error("line {line}: field `{field}` is given more than once")]
    DuplicateField { line: usize, field: String },

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: invalid answer `{value}` (expected yes or no)")]
    InvalidAnswer { line: usize, value: String },

    #[error("line {line}: age {age} is outside the accepted range 0..=18")]
    AgeOutOfRangeAt { line: usize, age: i64 },

    #[error("line {line}: temperature `{value}` is not a finite number")]
    NonFiniteTemperatureAt { line: usize, value: String },

    #[error("age {0} is outside the accepted range 0..=18")]
    AgeOutOfRange(i64),

    #[error("temperature must be a finite number")]
    NonFiniteTemperature,

    #[error("unknown symptom `{0}`")]
    UnknownSymptom(String),

    #[error("unknown unanswered policy `{0}` (expected `omit` or `no`)")]
    UnknownPolicy(String),

    #[error("invalid intake JSON: {0}")]
    Json(String),
}
