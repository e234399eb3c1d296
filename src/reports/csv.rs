//! CSV report generator.
//!
//! A short metadata preamble followed by one quoted row per threat,
//! suitable for spreadsheet import.

use super::escape::{csv_cell, escape_csv};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::{AssessmentReport, ThreatAssessment};
use chrono::SecondsFormat;
use std::fmt::Write;

const HEADER: &str =
    "Threat Name,Risk Level,Risk Score,Exposure Score,Impact Score,Likelihood Score";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        report: &AssessmentReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();

        writeln!(content, "Assessment: {}", escape_csv(&report.name))?;
        writeln!(content, "Industry: {}", escape_csv(report.industry_label()))?;
        writeln!(
            content,
            "Compliance Frameworks: {}",
            escape_csv(&report.compliance_frameworks.join(", "))
        )?;
        writeln!(
            content,
            "Overall Risk Score: {:.2}",
            f64::from(report.overall_risk_score())
        )?;
        writeln!(
            content,
            "Generated: {}",
            report
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(content)?;
        writeln!(content, "{HEADER}")?;

        for threat in &report.threats {
            writeln!(content, "{}", threat_row(threat))?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn threat_row(threat: &ThreatAssessment) -> String {
    let scores = &threat.scores;
    [
        csv_cell(&threat.threat_name),
        csv_cell(scores.risk_level.name()),
        csv_cell(&format!("{:.2}", f64::from(scores.risk_score))),
        csv_cell(&format!("{:.2}", f64::from(scores.exposure_score))),
        csv_cell(&format!("{:.2}", f64::from(scores.impact_score))),
        csv_cell(&format!("{:.2}", f64::from(scores.likelihood_score))),
    ]
    .join(",")
}
