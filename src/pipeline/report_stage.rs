//! Report output stage.

use super::{color_for_target, write_output, OutputTarget};
use crate::assessment::AssessmentReport;
use crate::config::AppConfig;
use crate::reports::{create_reporter_with_options, ReportGenerator};
use anyhow::{Context, Result};

/// Render an assessment in the configured format and write it to the
/// configured destination.
pub fn output_report(config: &AppConfig, report: &AssessmentReport) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = color_for_target(config.output.no_color, &target);

    let reporter = create_reporter_with_options(config.output.format, use_color);
    let content = reporter
        .generate(report, &config.output.report_config())
        .with_context(|| format!("Failed to generate {} report", config.output.format))?;

    write_output(&content, &target, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_output_report_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(path.clone()))
            .quiet(true)
            .build();

        output_report(&config, &sample_report()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["assessment"]["overallRiskScore"], 44);
    }

    #[test]
    fn test_output_settings_reach_reporter() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.html");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Html)
            .output_file(Some(path.clone()))
            .report_title(Some("Quarterly Risk Review".to_string()))
            .max_threats(Some(1))
            .quiet(true)
            .build();

        output_report(&config, &sample_report()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("<h1>Quarterly Risk Review</h1>"));
        assert!(written.contains("... and 1 more threats"));
    }

    #[test]
    fn test_summary_to_file_has_no_color() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("summary.txt");
        let config = AppConfig::builder()
            .output_file(Some(path.clone()))
            .quiet(true)
            .build();

        output_report(&config, &sample_report()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(!written.contains('\x1b'));
        assert!(written.contains("Overall risk:"));
    }
}
