//! Per-threat scoring and assessment aggregation.
//!
//! Every function here is pure and total: no I/O, no shared state, no
//! failure modes. Results must stay bit-identical across releases so that
//! historical assessments remain comparable, which is why the arithmetic
//! below follows a fixed evaluation order.

use super::level::RiskLevel;
use serde::{Deserialize, Serialize};

/// Mitigation factor applied when a response does not supply one
pub const DEFAULT_MITIGATION_FACTOR: f64 = 0.5;

/// Upper bound of the questionnaire exposure scale
pub const MAX_EXPOSURE_VALUE: i32 = 5;

/// Upper bound of every score
pub const MAX_SCORE: f64 = 100.0;

/// Divisor that brings exposure × impact × likelihood back to 0-100
const RISK_SCALE: f64 = 10_000.0;

/// Largest share of likelihood that full mitigation can remove
const MAX_MITIGATION_REDUCTION: f64 = 0.5;

/// Per-rank decay of aggregation weights
const RANK_DECAY: f64 = 0.9;

/// Inputs for scoring a single threat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatResponse {
    /// Questionnaire answer, expected 0-5
    pub exposure_value: i32,
    /// Inherent threat severity, expected 0-100
    pub threat_severity: f64,
    /// Effectiveness of existing controls, expected 0.0-1.0
    pub mitigation_factor: f64,
}

impl ThreatResponse {
    /// Create a response with the default mitigation factor
    #[must_use]
    pub const fn new(exposure_value: i32, threat_severity: f64) -> Self {
        Self {
            exposure_value,
            threat_severity,
            mitigation_factor: DEFAULT_MITIGATION_FACTOR,
        }
    }

    /// Override the mitigation factor
    #[must_use]
    pub const fn with_mitigation(mut self, mitigation_factor: f64) -> Self {
        self.mitigation_factor = mitigation_factor;
        self
    }

    /// Score this response
    #[must_use]
    pub fn score(&self) -> ScoredThreat {
        score_threat(
            self.exposure_value,
            self.threat_severity,
            self.mitigation_factor,
        )
    }
}

/// Scores computed for one threat. All values are integers in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredThreat {
    pub exposure_score: u8,
    pub impact_score: u8,
    pub likelihood_score: u8,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

/// Overall result for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAggregate {
    pub overall_risk_score: u8,
    pub overall_risk_level: RiskLevel,
}

impl AssessmentAggregate {
    /// Aggregate a set of per-threat risk scores
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        let overall_risk_score = aggregate_risk_scores(scores);
        Self {
            overall_risk_score,
            overall_risk_level: classify_risk_level(f64::from(overall_risk_score)),
        }
    }

    /// Aggregate already-scored threats
    #[must_use]
    pub fn from_scored(threats: &[ScoredThreat]) -> Self {
        let scores: Vec<f64> = threats.iter().map(|t| f64::from(t.risk_score)).collect();
        Self::from_scores(&scores)
    }
}

/// Classify a risk score into a [`RiskLevel`].
///
/// Breakpoints are inclusive lower bounds: 80 critical, 60 high, 40 medium.
#[must_use]
pub fn classify_risk_level(score: f64) -> RiskLevel {
    RiskLevel::from_score(score)
}

/// Score one threat from its exposure answer, severity and mitigation.
///
/// Out-of-domain inputs are not rejected; they propagate through the
/// arithmetic and the rounded results are clamped into 0-100. Use
/// [`super::InputPolicy`] to validate or clamp inputs beforehand.
#[must_use]
pub fn score_threat(
    exposure_value: i32,
    severity_score: f64,
    mitigation_factor: f64,
) -> ScoredThreat {
    let exposure_score = (f64::from(exposure_value) / f64::from(MAX_EXPOSURE_VALUE)) * MAX_SCORE;
    let impact_score = severity_score;

    // Likelihood tracks exposure one-to-one before mitigation
    let base_likelihood = (exposure_score / MAX_SCORE) * MAX_SCORE;
    let likelihood_score =
        base_likelihood * (1.0 - mitigation_factor * MAX_MITIGATION_REDUCTION);

    let raw_risk = (exposure_score * impact_score * likelihood_score) / RISK_SCALE;
    // Explicit comparison keeps NaN as NaN (f64::min would turn it into 100)
    let risk_score = if raw_risk > MAX_SCORE { MAX_SCORE } else { raw_risk };

    let risk_score = to_score(risk_score);

    ScoredThreat {
        exposure_score: to_score(exposure_score),
        impact_score: to_score(impact_score),
        likelihood_score: to_score(likelihood_score),
        risk_score,
        risk_level: classify_risk_level(f64::from(risk_score)),
    }
}

/// Combine per-threat risk scores into one overall score.
///
/// Scores are sorted descending and weighted `0.9^rank`, so the worst
/// threat anchors the result. Empty input yields 0.
#[must_use]
pub fn aggregate_risk_scores(scores: &[f64]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .fold(0.0, |sum, (idx, score)| sum + score * rank_weight(idx));
    let total_weight: f64 = (0..sorted.len()).fold(0.0, |sum, idx| sum + rank_weight(idx));

    to_score(weighted / total_weight)
}

/// Weight for the score at sorted position `idx`
fn rank_weight(idx: usize) -> f64 {
    RANK_DECAY.powf(idx as f64)
}

/// Round half toward positive infinity.
///
/// Differs from [`f64::round`] for negative ties (-2.5 rounds to -2).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round and clamp into the 0-100 score range. NaN maps to 0.
fn to_score(value: f64) -> u8 {
    let rounded = round_half_up(value);
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(0.0, MAX_SCORE) as u8
}
