//! Report generation for assessments.
//!
//! This module provides multiple output formats for an [`AssessmentReport`]:
//! - Summary: Compact terminal output with optional color
//! - JSON: Structured data for programmatic integration
//! - CSV: Spreadsheet import
//! - HTML: Standalone stakeholder report
//!
//! Every format lists threats in priority order.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! All user-controllable data (assessment names, threat names, evidence)
//! must be escaped before embedding in HTML or CSV reports.

mod csv;
pub mod escape;
mod html;
mod json;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::assessment::AssessmentReport;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for an assessment
    fn generate(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_report;
    use super::*;

    #[test]
    fn test_factory_formats() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Csv,
            ReportFormat::Html,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_sample_report_scores() {
        let report = sample_report();
        assert_eq!(report.threats[0].risk_score(), 75);
        assert_eq!(report.threats[1].risk_score(), 10);
        // (75 + 10*0.9) / 1.9 = 44.2
        assert_eq!(report.overall_risk_score(), 44);
    }
}
