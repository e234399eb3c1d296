//! Assessment result types.

use crate::scoring::{AssessmentAggregate, RiskLevel, ScoredThreat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored, ranked threat within an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatAssessment {
    pub threat_id: String,
    pub threat_name: String,
    pub category: String,
    /// 1-based position after ranking by risk score
    pub priority_rank: usize,
    /// Raw questionnaire answer
    pub exposure_value: i32,
    /// Level implied by the answer alone
    pub exposure_band: RiskLevel,
    /// Mitigation factor used for scoring, after defaults and policy
    pub mitigation_factor: f64,
    #[serde(flatten)]
    pub scores: ScoredThreat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mitigation_recommendations: Vec<String>,
}

impl ThreatAssessment {
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        self.scores.risk_level
    }

    #[must_use]
    pub const fn risk_score(&self) -> u8 {
        self.scores.risk_score
    }
}

/// Number of threats at each risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskDistribution {
    /// Count levels
    pub fn from_levels(levels: impl IntoIterator<Item = RiskLevel>) -> Self {
        let mut distribution = Self::default();
        for level in levels {
            match level {
                RiskLevel::Critical => distribution.critical += 1,
                RiskLevel::High => distribution.high += 1,
                RiskLevel::Medium => distribution.medium += 1,
                RiskLevel::Low => distribution.low += 1,
            }
        }
        distribution
    }

    #[must_use]
    pub const fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// A complete assessment: questionnaire metadata, ranked threats and the
/// overall result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub compliance_frameworks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(flatten)]
    pub overall: AssessmentAggregate,
    pub distribution: RiskDistribution,
    /// Threats in priority order
    pub threats: Vec<ThreatAssessment>,
    pub generated_at: DateTime<Utc>,
}

impl AssessmentReport {
    #[must_use]
    pub const fn overall_risk_score(&self) -> u8 {
        self.overall.overall_risk_score
    }

    #[must_use]
    pub const fn overall_risk_level(&self) -> RiskLevel {
        self.overall.overall_risk_level
    }

    /// Threats at or above `level`, in priority order
    pub fn threats_at_or_above(&self, level: RiskLevel) -> impl Iterator<Item = &ThreatAssessment> {
        self.threats
            .iter()
            .filter(move |t| t.risk_level() >= level)
    }

    /// Industry or a placeholder for display
    #[must_use]
    pub fn industry_label(&self) -> &str {
        self.industry.as_deref().unwrap_or("N/A")
    }
}
