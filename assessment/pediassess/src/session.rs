use pediassess_intake::{
    checked_age, Answer, IntakeForm, Symptom, UnansweredPolicy, CONTACT_HISTORY_QUESTION,
};
use pediassess_report::{render_text, submit};

pub const TITLE: &str = "Pediatric Patient Susceptibility Assessment";

/// One question on the form, in the order it is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Region,
    Age,
    Temperature,
    Symptom(Symptom),
    ContactHistory,
}

impl FormField {
    pub fn all() -> Vec<FormField> {
        let mut fields = vec![
            FormField::Name,
            FormField::Region,
            FormField::Age,
            FormField::Temperature,
        ];
        fields.extend(Symptom::ALL.into_iter().map(FormField::Symptom));
        fields.push(FormField::ContactHistory);
        fields
    }

    pub fn question(self) -> String {
        match self {
            FormField::Name => "Enter patient's name:".to_string(),
            FormField::Region => "Enter patient's region:".to_string(),
            FormField::Age => "Enter patient's age:".to_string(),
            FormField::Temperature => "Enter patient's temperature:".to_string(),
            FormField::Symptom(s) => s.question(),
            FormField::ContactHistory => format!("{CONTACT_HISTORY_QUESTION} (yes/no):"),
        }
    }

    /// Section heading printed before this field, if it opens one.
    fn section(self) -> Option<&'static str> {
        match self {
            FormField::Name => Some("Patient Information"),
            FormField::Symptom(Symptom::Coughing) => Some("Symptom Data"),
            FormField::ContactHistory => Some("Contact History"),
            _ => None,
        }
    }
}

/// Where a session stands after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    InProgress,
    /// The last question was answered and the report printed.
    Submitted,
    Cancelled,
}

impl FormStatus {
    pub fn is_over(self) -> bool {
        self != FormStatus::InProgress
    }
}

/// Interactive walk through the intake form, one line of input per field.
///
/// The session owns the form being filled in; nothing is shared between
/// sessions. Once the last field is answered the form is submitted and the
/// rendered report is returned as output.
#[derive(Debug)]
pub struct FormSession {
    form: IntakeForm,
    fields: Vec<FormField>,
    cursor: usize,
    policy: UnansweredPolicy,
    color: bool,
}

impl FormSession {
    pub fn new(policy: UnansweredPolicy, color: bool) -> Self {
        Self {
            form: IntakeForm::default(),
            fields: FormField::all(),
            cursor: 0,
            policy,
            color,
        }
    }

    pub fn intro(&self) -> Vec<String> {
        let mut out = vec![
            TITLE.to_string(),
            "type :help for commands; leave a symptom blank to skip it".to_string(),
            String::new(),
        ];
        if let Some(section) = self.current().and_then(FormField::section) {
            out.push(section.to_string());
        }
        out
    }

    pub fn current(&self) -> Option<FormField> {
        self.fields.get(self.cursor).copied()
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn prompt(&self) -> String {
        self.current()
            .map(|f| format!("{} ", f.question()))
            .unwrap_or_default()
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, FormStatus) {
        match line {
            ":help" => (
                vec![
                    "commands: :help, :back, :skip, :quit".to_string(),
                    "answer symptoms with yes/no (y/n); blank leaves them unanswered".to_string(),
                ],
                FormStatus::InProgress,
            ),
            ":q" | ":quit" | ":exit" => (
                vec!["assessment cancelled".to_string()],
                FormStatus::Cancelled,
            ),
            ":back" => {
                if self.cursor == 0 {
                    (
                        vec!["error: already at the first question".to_string()],
                        FormStatus::InProgress,
                    )
                } else {
                    self.cursor -= 1;
                    (Vec::new(), FormStatus::InProgress)
                }
            }
            ":skip" => self.answer(""),
            other => (
                vec![format!("error: unknown command '{other}'")],
                FormStatus::InProgress,
            ),
        }
    }

    /// Feed one line of input. Returns the lines to print and the session
    /// status afterwards.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, FormStatus) {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        self.answer(trimmed)
    }

    fn answer(&mut self, value: &str) -> (Vec<String>, FormStatus) {
        let Some(field) = self.current() else {
            return (Vec::new(), FormStatus::Submitted);
        };
        if let Err(e) = self.apply(field, value) {
            return (vec![format!("error: {e}")], FormStatus::InProgress);
        }

        self.cursor += 1;
        match self.current() {
            Some(next) => {
                let out = next
                    .section()
                    .map(|s| vec![String::new(), s.to_string()])
                    .unwrap_or_default();
                (out, FormStatus::InProgress)
            }
            None => self.finish(),
        }
    }

    fn apply(&mut self, field: FormField, value: &str) -> Result<(), String> {
        let patient = &mut self.form.patient;
        match field {
            FormField::Name => patient.name = value.to_string(),
            FormField::Region => patient.region = value.to_string(),
            FormField::Age => {
                let age = if value.is_empty() {
                    0
                } else {
                    value
                        .parse::<i64>()
                        .map_err(|_| format!("age must be a whole number, got '{value}'"))?
                };
                patient.age = checked_age(age).map_err(|e| e.to_string())?;
            }
            FormField::Temperature => {
                let temperature = if value.is_empty() {
                    0.0
                } else {
                    value
                        .parse::<f64>()
                        .map_err(|_| format!("temperature must be a number, got '{value}'"))?
                };
                if !temperature.is_finite() {
                    return Err("temperature must be a finite number".to_string());
                }
                patient.temperature = temperature;
            }
            FormField::Symptom(symptom) => {
                let answer = parse_answer(value)?;
                self.form.set_symptom(symptom, answer);
            }
            FormField::ContactHistory => self.form.contact_history = parse_answer(value)?,
        }
        Ok(())
    }

    fn finish(&self) -> (Vec<String>, FormStatus) {
        let mut out = vec![String::new()];
        match submit(&self.form, self.policy) {
            Ok(report) => {
                out.extend(render_text(&report, self.color).lines().map(String::from));
                (out, FormStatus::Submitted)
            }
            Err(e) => {
                out.push(format!("error: {e}"));
                (out, FormStatus::Cancelled)
            }
        }
    }
}

fn parse_answer(value: &str) -> Result<Answer, String> {
    Answer::parse(value).ok_or_else(|| format!("please answer yes or no, got '{value}'"))
}
