use colored::Colorize;

use crate::advisory::{Severity, CLOSING_LINE};
use crate::report::AssessmentReport;

fn paint(text: &str, severity: Severity) -> String {
    match severity {
        Severity::Success => text.green().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Error => text.red().bold().to_string(),
    }
}

/// Render the results screen. With `color` the risk label and advisory are
/// tinted green, yellow or red by severity.
pub fn render_text(report: &AssessmentReport, color: bool) -> String {
    let level = report.result.risk_level.label();
    let (level, advisory) = if color {
        (paint(level, report.severity), paint(report.advisory, report.severity))
    } else {
        (level.to_string(), report.advisory.to_string())
    };
    let heading = if color {
        "Assessment Results".bold().to_string()
    } else {
        "Assessment Results".to_string()
    };

    [
        heading,
        format!("Patient Name: {}", report.patient.name),
        format!("Patient Age: {}", report.patient.age),
        format!("Patient Region: {}", report.patient.region),
        format!("Patient Temperature: {:.2}", report.patient.temperature),
        format!(
            "Frequency of 'yes' responses: {:.2}",
            report.result.frequency
        ),
        format!("Calculated Risk Level: {level}"),
        String::new(),
        advisory,
        String::new(),
        CLOSING_LINE.to_string(),
    ]
    .join("\n")
}

pub fn render_json(report: &AssessmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
