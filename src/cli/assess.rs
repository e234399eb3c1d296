//! Assess command handler.
//!
//! Implements the `assess` subcommand: score every response in a
//! questionnaire against the threat catalog and report the result.

use crate::assessment::AssessmentBuilder;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_catalog, load_questionnaire, output_report, resolve_catalog_path};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Run the assess command, returning the desired exit code.
pub fn run_assess(
    config: &AppConfig,
    questionnaire_path: &Path,
    catalog: Option<PathBuf>,
) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let catalog_path = resolve_catalog_path(catalog.as_deref(), &config.catalog)?;

    let catalog = load_catalog(&catalog_path, quiet)?;
    let questionnaire = load_questionnaire(questionnaire_path, quiet)?;

    let report = AssessmentBuilder::new(&catalog, &config.scoring)
        .build(&questionnaire)
        .context("Failed to build assessment")?;

    output_report(config, &report)?;

    let level = report.overall_risk_level();
    let code = exit_codes::for_level(level, config.behavior.fail_on);
    if code == exit_codes::RISK_THRESHOLD && !quiet {
        tracing::warn!(
            "Overall risk level {} reached the fail-on threshold",
            level.label()
        );
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use crate::scoring::RiskLevel;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r"
threats:
  - threat_id: T-RANSOM
    name: Ransomware
    severity_base_score: 95
  - threat_id: T-PHISH
    name: Phishing
    severity_base_score: 80
";

    const QUESTIONNAIRE: &str = r"
name: Annual review
responses:
  - threat_id: T-RANSOM
    response_value: 5
    mitigation_factor: 0.0
  - threat_id: T-PHISH
    response_value: 1
";

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
        let catalog = dir.join("catalog.yaml");
        let questionnaire = dir.join("questionnaire.yaml");
        fs::write(&catalog, CATALOG).unwrap();
        fs::write(&questionnaire, QUESTIONNAIRE).unwrap();
        (catalog, questionnaire)
    }

    fn config_for(dir: &Path, fail_on: Option<RiskLevel>) -> AppConfig {
        AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(dir.join("report.json")))
            .fail_on(fail_on)
            .quiet(true)
            .build()
    }

    #[test]
    fn test_assess_writes_report() {
        let tmp = TempDir::new().unwrap();
        let (catalog, questionnaire) = write_inputs(tmp.path());
        let config = config_for(tmp.path(), None);

        let code = run_assess(&config, &questionnaire, Some(catalog)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let written = fs::read_to_string(tmp.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["threats"][0]["threatId"], "T-RANSOM");
        assert_eq!(value["threats"][0]["riskScore"], 95);
    }

    #[test]
    fn test_assess_fail_on_threshold() {
        let tmp = TempDir::new().unwrap();
        let (catalog, questionnaire) = write_inputs(tmp.path());
        let config = config_for(tmp.path(), Some(RiskLevel::Medium));

        let code = run_assess(&config, &questionnaire, Some(catalog)).unwrap();
        assert_eq!(code, exit_codes::RISK_THRESHOLD);
    }

    #[test]
    fn test_assess_unknown_threat_is_validation_failure() {
        let tmp = TempDir::new().unwrap();
        let (catalog, _) = write_inputs(tmp.path());
        let questionnaire = tmp.path().join("bad.yaml");
        fs::write(
            &questionnaire,
            "name: Bad\nresponses:\n  - threat_id: T-NOPE\n    response_value: 3\n",
        )
        .unwrap();
        let config = config_for(tmp.path(), None);

        let err = run_assess(&config, &questionnaire, Some(catalog)).unwrap_err();
        assert_eq!(exit_codes::for_error(&err), exit_codes::VALIDATION_FAILED);
    }
}
