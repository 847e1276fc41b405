use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Question text for the contact/consumption history item.
pub const CONTACT_HISTORY_QUESTION: &str =
    "Contact/consumption of infected/sick/dead animals/remains";

/// The fixed symptom checklist, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symptom {
    Coughing,
    ChestPain,
    BreathingProblems,
    PapuleAppearance,
    SkinPain,
    Diarrhea,
    AbdominalPain,
    ConjunctivalCongestion,
    BurningEyes,
    ItchyEyes,
    EyeSecretions,
    BlistersUlcersHandFootMouth,
}

impl Symptom {
    pub const ALL: [Symptom; 12] = [
        Symptom::Coughing,
        Symptom::ChestPain,
        Symptom::BreathingProblems,
        Symptom::PapuleAppearance,
        Symptom::SkinPain,
        Symptom::Diarrhea,
        Symptom::AbdominalPain,
        Symptom::ConjunctivalCongestion,
        Symptom::BurningEyes,
        Symptom::ItchyEyes,
        Symptom::EyeSecretions,
        Symptom::BlistersUlcersHandFootMouth,
    ];

    /// Stable identifier, used as the response key and in JSON.
    pub const fn key(self) -> &'static str {
        match self {
            Symptom::Coughing => "coughing",
            Symptom::ChestPain => "chest_pain",
            Symptom::BreathingProblems => "breathing_problems",
            Symptom::PapuleAppearance => "papule_appearance",
            Symptom::SkinPain => "skin_pain",
            Symptom::Diarrhea => "diarrhea",
            Symptom::AbdominalPain => "abdominal_pain",
            Symptom::ConjunctivalCongestion => "conjunctival_congestion",
            Symptom::BurningEyes => "burning_eyes",
            Symptom::ItchyEyes => "itchy_eyes",
            Symptom::EyeSecretions => "eye_secretions",
            Symptom::BlistersUlcersHandFootMouth => "blisters_ulcers_hand_foot_mouth",
        }
    }

    /// Human-readable name as printed on the form.
    pub const fn label(self) -> &'static str {
        match self {
            Symptom::Coughing => "coughing",
            Symptom::ChestPain => "chest pain",
            Symptom::BreathingProblems => "breathing problems",
            Symptom::PapuleAppearance => "papule appearance",
            Symptom::SkinPain => "skin pain",
            Symptom::Diarrhea => "diarrhea",
            Symptom::AbdominalPain => "abdominal pain",
            Symptom::ConjunctivalCongestion => "conjunctival congestion",
            Symptom::BurningEyes => "burning eyes",
            Symptom::ItchyEyes => "itchy eyes",
            Symptom::EyeSecretions => "eye secretions",
            Symptom::BlistersUlcersHandFootMouth => "blisters/ulcers in hand/foot/mouth",
        }
    }

    /// Form prompt, e.g. `Chest pain (yes/no):`.
    pub fn question(self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => format!("{}{} (yes/no):", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    /// Look a symptom up by key or label. Case, `_`, `-` and runs of
    /// whitespace are not significant.
    pub fn parse(name: &str) -> Option<Symptom> {
        let wanted = normalize_name(name);
        Symptom::ALL.into_iter().find(|s| {
            normalize_name(s.key()) == wanted || normalize_name(s.label()) == wanted
        })
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symptom::parse(s).ok_or_else(|| IntakeError::UnknownSymptom(s.to_string()))
    }
}

impl TryFrom<String> for Symptom {
    type Error = IntakeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symptom> for String {
    fn from(value: Symptom) -> Self {
        value.key().to_string()
    }
}

/// A single yes/no radio. Nothing is pre-selected on the form, so an item
/// the clinician skipped stays [`Answer::Unanswered`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl Answer {
    /// Accepts `yes`/`y`/`no`/`n` in any case; blank input is unanswered.
    pub fn parse(input: &str) -> Option<Answer> {
        match input.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(Answer::Yes),
            "no" | "n" => Some(Answer::No),
            "" => Some(Answer::Unanswered),
            _ => None,
        }
    }

    /// `None` when unanswered.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unanswered => None,
        }
    }

    pub fn is_answered(self) -> bool {
        self != Answer::Unanswered
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unanswered => "unanswered",
        })
    }
}
