//! Golden tests: assess the fixture questionnaire against the fixture catalog
//! and check every score, rank and report format.

use riskgauge::config::ScoringConfig;
use riskgauge::reports::{
    create_reporter_with_options, ReportConfig, ReportFormat, ReportGenerator,
};
use riskgauge::{
    AssessmentBuilder, AssessmentReport, InputPolicy, Questionnaire, RiskLevel, ThreatCatalog,
};
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn catalog() -> ThreatCatalog {
    ThreatCatalog::load(&fixture_path("catalog.yaml")).expect("failed to load catalog fixture")
}

fn assess(questionnaire: &str, policy: InputPolicy) -> riskgauge::Result<AssessmentReport> {
    let questionnaire = Questionnaire::load(&fixture_path(questionnaire))?;
    let scoring = ScoringConfig {
        input_policy: policy,
        ..ScoringConfig::default()
    };
    AssessmentBuilder::new(&catalog(), &scoring).build(&questionnaire)
}

fn golden_report() -> AssessmentReport {
    assess("questionnaire.yaml", InputPolicy::Permissive).expect("assessment should succeed")
}

#[test]
fn golden_catalog_loads_in_file_order() {
    let catalog = catalog();
    let ids: Vec<&str> = catalog.iter().map(|t| t.threat_id.as_str()).collect();
    assert_eq!(ids, ["T-RANSOM", "T-PHISH", "T-INSIDER", "T-DDOS", "T-SUPPLY"]);

    let by_severity: Vec<&str> = catalog
        .by_severity()
        .iter()
        .map(|t| t.threat_id.as_str())
        .collect();
    assert_eq!(by_severity, ["T-RANSOM", "T-SUPPLY", "T-PHISH", "T-INSIDER", "T-DDOS"]);
}

#[test]
fn golden_threat_scores_and_ranks() {
    let report = golden_report();

    // (id, rank, exposure, impact, likelihood, risk, level)
    let expected = [
        ("T-PHISH", 1, 100, 80, 100, 80, RiskLevel::Critical),
        ("T-SUPPLY", 2, 100, 85, 75, 64, RiskLevel::High),
        ("T-RANSOM", 3, 80, 95, 72, 55, RiskLevel::Medium),
        ("T-DDOS", 4, 60, 60, 30, 11, RiskLevel::Low),
        ("T-INSIDER", 5, 40, 70, 30, 8, RiskLevel::Low),
    ];
    assert_eq!(report.threats.len(), expected.len());

    for (threat, (id, rank, exposure, impact, likelihood, risk, level)) in
        report.threats.iter().zip(expected)
    {
        assert_eq!(threat.threat_id, id);
        assert_eq!(threat.priority_rank, rank, "{id}");
        assert_eq!(threat.scores.exposure_score, exposure, "{id}");
        assert_eq!(threat.scores.impact_score, impact, "{id}");
        assert_eq!(threat.scores.likelihood_score, likelihood, "{id}");
        assert_eq!(threat.risk_score(), risk, "{id}");
        assert_eq!(threat.risk_level(), level, "{id}");
    }
}

#[test]
fn golden_overall_and_distribution() {
    let report = golden_report();

    assert_eq!(report.overall_risk_score(), 48);
    assert_eq!(report.overall_risk_level(), RiskLevel::Medium);
    assert_eq!(report.distribution.critical, 1);
    assert_eq!(report.distribution.high, 1);
    assert_eq!(report.distribution.medium, 1);
    assert_eq!(report.distribution.low, 2);
    assert_eq!(report.distribution.total(), 5);
    assert_eq!(report.threats_at_or_above(RiskLevel::High).count(), 2);
}

#[test]
fn golden_metadata_and_details_carried() {
    let report = golden_report();

    assert_eq!(report.id.as_deref(), Some("asmt-2024-01"));
    assert_eq!(report.industry_label(), "Healthcare");
    assert_eq!(report.compliance_frameworks, ["HIPAA", "ISO 27001"]);

    let ransom = report
        .threats
        .iter()
        .find(|t| t.threat_id == "T-RANSOM")
        .expect("ransomware assessed");
    assert_eq!(ransom.evidence.as_deref(), Some("Backups are online only"));
    assert_eq!(ransom.mitigation_recommendations.len(), 2);

    let insider = report
        .threats
        .iter()
        .find(|t| t.threat_id == "T-INSIDER")
        .expect("insider assessed");
    assert!((insider.mitigation_factor - 0.5).abs() < f64::EPSILON);
}

#[test]
fn golden_json_questionnaire_matches_yaml() {
    let yaml = golden_report();
    let json = assess("questionnaire.json", InputPolicy::Permissive).expect("json assessment");

    assert_eq!(json.name, yaml.name);
    assert_eq!(json.overall, yaml.overall);
    assert_eq!(json.distribution, yaml.distribution);
    let scores = |report: &AssessmentReport| {
        report
            .threats
            .iter()
            .map(|t| (t.threat_id.clone(), t.scores))
            .collect::<Vec<_>>()
    };
    assert_eq!(scores(&json), scores(&yaml));
}

// ============================================================================
// Input policies
// ============================================================================

#[test]
fn golden_out_of_range_permissive() {
    let report = assess("questionnaire-out-of-range.yaml", InputPolicy::Permissive)
        .expect("permissive accepts anything");

    let phish = &report.threats[0];
    assert_eq!(phish.threat_id, "T-PHISH");
    assert_eq!(phish.scores.exposure_score, 100);
    assert_eq!(phish.risk_score(), 100);
    assert_eq!(phish.risk_level(), RiskLevel::Critical);

    let ddos = &report.threats[1];
    assert_eq!(ddos.scores.likelihood_score, 15);
    assert_eq!(ddos.risk_score(), 5);
}

#[test]
fn golden_out_of_range_clamped() {
    let report = assess("questionnaire-out-of-range.yaml", InputPolicy::Clamp)
        .expect("clamp accepts anything");

    let phish = &report.threats[0];
    assert_eq!(phish.exposure_value, 5);
    assert_eq!(phish.risk_score(), 60);
    assert_eq!(phish.risk_level(), RiskLevel::High);

    let ddos = &report.threats[1];
    assert_eq!(ddos.risk_score(), 11);
}

#[test]
fn golden_out_of_range_strict() {
    let err = assess("questionnaire-out-of-range.yaml", InputPolicy::Strict)
        .expect_err("strict rejects the first bad answer");
    let source = std::error::Error::source(&err)
        .map(ToString::to_string)
        .unwrap_or_default();
    let message = format!("{err}: {source}");
    assert!(message.contains("T-PHISH"), "{message}");
}

// ============================================================================
// Report formats
// ============================================================================

fn render(format: ReportFormat) -> String {
    create_reporter_with_options(format, false)
        .generate(&golden_report(), &ReportConfig::default())
        .expect("report generation should succeed")
}

#[test]
fn golden_json_report() {
    let value: serde_json::Value = serde_json::from_str(&render(ReportFormat::Json)).unwrap();

    assert_eq!(value["assessment"]["name"], "FY2024 Security Review");
    assert_eq!(value["assessment"]["overallRiskScore"], 48);
    assert_eq!(value["assessment"]["overallRiskLevel"], "medium");
    assert_eq!(value["threats"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["threats"][0]["threatId"], "T-PHISH");
    assert_eq!(value["threats"][0]["riskLevel"], "critical");
}

#[test]
fn golden_csv_report() {
    let csv = render(ReportFormat::Csv);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Assessment: FY2024 Security Review");
    assert_eq!(lines[1], "Industry: Healthcare");
    assert_eq!(lines[2], "Compliance Frameworks: HIPAA, ISO 27001");
    assert_eq!(lines[3], "Overall Risk Score: 48.00");
    assert!(lines[4].starts_with("Generated: "));
    assert!(lines[4].ends_with('Z'));
    assert_eq!(
        lines[6],
        "Threat Name,Risk Level,Risk Score,Exposure Score,Impact Score,Likelihood Score"
    );
    assert_eq!(
        lines[7],
        r#""Phishing","critical","80.00","100.00","80.00","100.00""#
    );
    assert_eq!(lines.len(), 12);
}

#[test]
fn golden_html_report() {
    let html = render(ReportFormat::Html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("FY2024 Security Review"));
    assert!(html.contains("48.0/100"));
    assert!(html.contains("Supply Chain Compromise"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn golden_summary_report() {
    let summary = render(ReportFormat::Summary);

    assert!(summary.contains("Overall risk:  48/100 (Medium)"));
    assert!(summary.contains("Frameworks:  HIPAA, ISO 27001"));
    assert!(!summary.contains('\x1b'));
}
