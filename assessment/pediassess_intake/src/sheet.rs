//! Plain-text intake sheets.
//!
//! One `field: value` pair per line. Blank lines and lines starting with
//! `#` are ignored. Field names are matched case-insensitively; symptom
//! fields accept either the printed label or the key (`chest pain` or
//! `chest_pain`). A symptom left blank (`itchy eyes:`) is unanswered.

use std::collections::HashSet;

use nom::{
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, space0},
    combinator::{all_consuming, map, rest},
    sequence::{pair, preceded, separated_pair},
    IResult,
};

use crate::error::IntakeError;
use crate::form::IntakeForm;
use crate::patient::checked_age;
use crate::symptom::{normalize_name, Answer, Symptom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetLine<'a> {
    Blank,
    Comment,
    Entry { field: &'a str, value: &'a str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Name,
    Region,
    Age,
    Temperature,
    ContactHistory,
    Symptom(Symptom),
}

impl Field {
    fn parse(name: &str) -> Option<Field> {
        match normalize_name(name).as_str() {
            "name" | "patient name" => Some(Field::Name),
            "region" | "patient region" => Some(Field::Region),
            "age" | "patient age" => Some(Field::Age),
            "temperature" | "temp" | "patient temperature" => Some(Field::Temperature),
            "contact history" | "contact" => Some(Field::ContactHistory),
            _ => Symptom::parse(name).map(Field::Symptom),
        }
    }
}

fn blank(input: &str) -> IResult<&str, SheetLine<'_>> {
    map(all_consuming(space0), |_| SheetLine::Blank)(input)
}

fn comment(input: &str) -> IResult<&str, SheetLine<'_>> {
    map(preceded(pair(space0, char('#')), rest), |_| SheetLine::Comment)(input)
}

fn entry(input: &str) -> IResult<&str, SheetLine<'_>> {
    let parsed: IResult<&str, (&str, &str)> =
        separated_pair(take_till1(|c: char| c == ':'), char(':'), rest)(input);
    let (remaining, (field, value)) = parsed?;
    Ok((
        remaining,
        SheetLine::Entry {
            field: field.trim(),
            value: value.trim(),
        },
    ))
}

fn sheet_line(input: &str) -> IResult<&str, SheetLine<'_>> {
    alt((blank, comment, entry))(input)
}

/// Parse a whole intake sheet into a form.
pub fn parse_intake_sheet(text: &str) -> Result<IntakeForm, IntakeError> {
    let mut form = IntakeForm::default();
    let mut seen = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let (field_name, value) = match sheet_line(raw) {
            Ok((_, SheetLine::Blank | SheetLine::Comment)) => continue,
            Ok((_, SheetLine::Entry { field, value })) if !field.is_empty() => (field, value),
            _ => {
                return Err(IntakeError::MalformedLine {
                    line,
                    text: raw.trim().to_string(),
                })
            }
        };

        let field = Field::parse(field_name).ok_or_else(|| IntakeError::UnknownField {
            line,
            field: field_name.to_string(),
        })?;
        if !seen.insert(field) {
            return Err(IntakeError::DuplicateField {
                line,
                field: field_name.to_string(),
            });
        }
        log::trace!("line {line}: {field:?} = {value:?}");

        match field {
            Field::Name => form.patient.name = value.to_string(),
            Field::Region => form.patient.region = value.to_string(),
            Field::Age => {
                let age = parse_number::<i64>(line, "age", value)?;
                form.patient.age =
                    checked_age(age).map_err(|_| IntakeError::AgeOutOfRangeAt { line, age })?;
            }
            Field::Temperature => {
                let temperature = parse_number::<f64>(line, "temperature", value)?;
                if !temperature.is_finite() {
                    return Err(IntakeError::NonFiniteTemperatureAt {
                        line,
                        value: value.to_string(),
                    });
                }
                form.patient.temperature = temperature;
            }
            Field::ContactHistory => form.contact_history = parse_answer(line, value)?,
            Field::Symptom(symptom) => form.set_symptom(symptom, parse_answer(line, value)?),
        }
    }

    log::debug!(
        "parsed intake sheet: {} of {} symptoms answered",
        form.answered_symptoms(),
        Symptom::ALL.len()
    );
    Ok(form)
}

/// Blank numbers keep the form default of zero.
fn parse_number<T>(line: usize, field: &'static str, value: &str) -> Result<T, IntakeError>
where
    T: std::str::FromStr + Default,
{
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse().map_err(|_| IntakeError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_answer(line: usize, value: &str) -> Result<Answer, IntakeError> {
    Answer::parse(value).ok_or_else(|| IntakeError::InvalidAnswer {
        line,
        value: value.to_string(),
    })
}
