//! Shared fixtures for the integration tests.

use pediassess_intake::Symptom;

/// An intake sheet with the first `yes` symptoms answered "yes", the rest
/// "no", and the given contact-history answer.
pub fn intake_sheet(yes: usize, contact_history: bool) -> String {
    let mut sheet = String::from("name: Test Patient\nregion: North\nage: 9\ntemperature: 37.8\n");
    for (i, s) in Symptom::ALL.iter().enumerate() {
        let answer = if i < yes { "yes" } else { "no" };
        sheet.push_str(&format!("{}: {answer}\n", s.label()));
    }
    let contact = if contact_history { "yes" } else { "no" };
    sheet.push_str(&format!("contact history: {contact}\n"));
    sheet
}

/// Answers for the interactive form, patient details first.
pub fn form_answers(yes: usize, contact_history: bool) -> Vec<String> {
    let mut lines: Vec<String> = ["Test Patient", "North", "9", "37.8"]
        .into_iter()
        .map(String::from)
        .collect();
    lines.extend((0..Symptom::ALL.len()).map(|i| if i < yes { "y" } else { "n" }.to_string()));
    lines.push(if contact_history { "y" } else { "n" }.to_string());
    lines
}
