use pediassess::read_intake_text;
use pediassess_intake::{load_intake, parse_intake_sheet, Answer, Symptom, UnansweredPolicy};
use pediassess_report::{render_json, render_text, submit, Severity};
use pediassess_score::RiskLevel;
use pretty_assertions::assert_eq;
use tests::intake_sheet;

fn level_for(yes: usize, contact: bool) -> (f64, RiskLevel) {
    let form = parse_intake_sheet(&intake_sheet(yes, contact)).unwrap();
    let report = submit(&form, UnansweredPolicy::Omit).unwrap();
    (report.result.frequency, report.result.risk_level)
}

#[test]
fn complete_sheets_classify_by_yes_share() {
    assert_eq!(level_for(0, false), (0.0, RiskLevel::Low));
    assert_eq!(level_for(12, true), (1.0, RiskLevel::High));
    assert_eq!(level_for(4, false).1, RiskLevel::Low);
    assert_eq!(level_for(4, true).1, RiskLevel::Medium);
    assert_eq!(level_for(8, false).1, RiskLevel::Medium);
    assert_eq!(level_for(8, true).1, RiskLevel::High);
}

#[test]
fn partial_form_depends_on_policy() {
    let form = load_intake("coughing: yes\nchest pain: no\ncontact history: no\n").unwrap();
    assert_eq!(form.answer(Symptom::Diarrhea), Answer::Unanswered);

    let omit = submit(&form, UnansweredPolicy::Omit).unwrap();
    let as_no = submit(&form, UnansweredPolicy::CountAsNo).unwrap();

    assert_eq!(omit.responses_considered, 3);
    assert_eq!(omit.result.risk_level, RiskLevel::Medium);
    assert_eq!(as_no.responses_considered, 13);
    assert_eq!(as_no.result.risk_level, RiskLevel::Low);
}

#[test]
fn file_input_to_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake.txt");
    std::fs::write(&path, intake_sheet(5, false)).unwrap();

    let text = read_intake_text(Some(path.as_path())).unwrap();
    let report = submit(&load_intake(&text).unwrap(), UnansweredPolicy::Omit).unwrap();
    assert_eq!(report.severity, Severity::Warning);

    let rendered = render_text(&report, false);
    assert!(rendered.contains("Patient Name: Test Patient"));
    assert!(rendered.contains("Frequency of 'yes' responses: 0.38"));
    assert!(rendered.contains("Calculated Risk Level: Medium Risk"));
    assert!(rendered.contains("moderately susceptible"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_intake_text(Some(dir.path().join("nope.txt").as_path())).unwrap_err();
    assert!(err.starts_with("failed to read"));
}

#[test]
fn json_report_round_trips_the_patient() {
    let form = load_intake(&intake_sheet(12, true)).unwrap();
    let report = submit(&form, UnansweredPolicy::Omit).unwrap();
    let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert_eq!(value["patient"]["age"], 9);
    assert_eq!(value["patient"]["region"], "North");
    assert_eq!(value["result"]["frequency"], 1.0);
    assert_eq!(value["advisory"], report.advisory);
}
