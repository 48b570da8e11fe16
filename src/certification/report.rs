use std::fmt;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::recommendation::format_amount;
use super::CertificationResult;

const BAR_WIDTH: usize = 20;

/// Flat, one-line view of a result for spreadsheet exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub employee_id: String,
    pub current_level: String,
    pub target_level: String,
    pub verdict: &'static str,
    pub evaluation_passed: bool,
    pub training_passed: bool,
    pub skills_passed: bool,
    pub experience_passed: bool,
    pub evaluation_progress: f64,
    pub training_progress: f64,
    pub skills_progress: f64,
    pub experience_progress: f64,
    pub overall_progress: f64,
    pub expected_certification_date: Option<NaiveDate>,
    pub recommendations: String,
}

impl SummaryRow {
    pub fn new(employee_id: impl Into<String>, result: &CertificationResult) -> Self {
        Self {
            employee_id: employee_id.into(),
            current_level: result.current_level.clone(),
            target_level: result.target_level.clone(),
            verdict: result.verdict.label(),
            evaluation_passed: result.checks.evaluation,
            training_passed: result.checks.training,
            skills_passed: result.checks.skills,
            experience_passed: result.checks.experience,
            evaluation_progress: result.progress.evaluation,
            training_progress: result.progress.training,
            skills_progress: result.progress.skills,
            experience_progress: result.progress.experience,
            overall_progress: result.progress.overall,
            expected_certification_date: result.expected_certification_date,
            recommendations: result.recommendations.join("; "),
        }
    }
}

pub fn write_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Human readable block for terminal output.
pub fn render_text(employee_id: Option<&str>, result: &CertificationResult) -> String {
    TextReport {
        employee_id,
        result,
    }
    .to_string()
}

struct TextReport<'a> {
    employee_id: Option<&'a str>,
    result: &'a CertificationResult,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        if let Some(id) = self.employee_id {
            write!(f, "Employee {id}: ")?;
        }
        writeln!(f, "{} -> {}", result.current_level, result.target_level)?;
        writeln!(f, "Verdict: {}", result.verdict.label())?;

        let dimensions = [
            ("evaluation", result.checks.evaluation, result.progress.evaluation),
            ("training", result.checks.training, result.progress.training),
            ("skills", result.checks.skills, result.progress.skills),
            ("experience", result.checks.experience, result.progress.experience),
        ];
        for (name, passed, progress) in dimensions {
            let mark = if passed { "pass" } else { "gap " };
            writeln!(
                f,
                "  {name:<10} [{mark}] {} {:>5}%",
                progress_bar(progress),
                format_amount(progress)
            )?;
        }
        writeln!(
            f,
            "  {:<10}        {} {:>5}%",
            "overall",
            progress_bar(result.progress.overall),
            format_amount(result.progress.overall)
        )?;

        if let Some(date) = result.expected_certification_date {
            writeln!(f, "Expected certification: {date}")?;
        }

        if !result.recommendations.is_empty() {
            writeln!(f, "Recommendations:")?;
            for recommendation in &result.recommendations {
                writeln!(f, "  - {recommendation}")?;
            }
        }

        Ok(())
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
