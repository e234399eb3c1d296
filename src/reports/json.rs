//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::{AssessmentReport, ThreatAssessment};
use crate::scoring::RiskLevel;
use chrono::SecondsFormat;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        report: &AssessmentReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let document = JsonAssessmentReport {
            assessment: JsonAssessment {
                id: report.id.as_deref(),
                name: &report.name,
                industry: report.industry.as_deref(),
                compliance_frameworks: &report.compliance_frameworks,
                overall_risk_score: report.overall_risk_score(),
                overall_risk_level: report.overall_risk_level(),
                created_by: report.created_by.as_deref(),
                generated_at: report
                    .generated_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            threats: report.threats.iter().map(JsonThreat::from).collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON document shape
// ============================================================================

#[derive(Serialize)]
struct JsonAssessmentReport<'a> {
    assessment: JsonAssessment<'a>,
    threats: Vec<JsonThreat<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAssessment<'a> {
    id: Option<&'a str>,
    name: &'a str,
    industry: Option<&'a str>,
    compliance_frameworks: &'a [String],
    overall_risk_score: u8,
    overall_risk_level: RiskLevel,
    created_by: Option<&'a str>,
    generated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonThreat<'a> {
    threat_id: &'a str,
    threat_name: &'a str,
    priority_rank: usize,
    risk_level: RiskLevel,
    risk_score: u8,
    exposure_score: u8,
    impact_score: u8,
    likelihood_score: u8,
}

impl<'a> From<&'a ThreatAssessment> for JsonThreat<'a> {
    fn from(threat: &'a ThreatAssessment) -> Self {
        Self {
            threat_id: &threat.threat_id,
            threat_name: &threat.threat_name,
            priority_rank: threat.priority_rank,
            risk_level: threat.scores.risk_level,
            risk_score: threat.scores.risk_score,
            exposure_score: threat.scores.exposure_score,
            impact_score: threat.scores.impact_score,
            likelihood_score: threat.scores.likelihood_score,
        }
    }
}
