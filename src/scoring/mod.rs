//! Risk scoring engine.
//!
//! Turns questionnaire exposure answers and threat severities into
//! per-threat risk scores, classifies them into risk levels, and combines
//! them into one overall assessment score.
//!
//! # Usage
//!
//! ```
//! use riskgauge::scoring::{aggregate_risk_scores, score_threat, RiskLevel};
//!
//! let phishing = score_threat(5, 100.0, 0.0);
//! assert_eq!(phishing.risk_score, 100);
//! assert_eq!(phishing.risk_level, RiskLevel::Critical);
//!
//! let ransomware = score_threat(5, 100.0, 1.0);
//! assert_eq!(ransomware.risk_score, 50);
//!
//! let overall = aggregate_risk_scores(&[90.0, 10.0]);
//! assert_eq!(overall, 52);
//! ```

mod engine;
mod level;
mod policy;

pub use engine::{
    AssessmentAggregate, DEFAULT_MITIGATION_FACTOR, MAX_EXPOSURE_VALUE, MAX_SCORE, ScoredThreat,
    ThreatResponse, aggregate_risk_scores, classify_risk_level, round_half_up, score_threat,
};
pub use level::{CRITICAL_THRESHOLD, HIGH_THRESHOLD, MEDIUM_THRESHOLD, RiskLevel};
pub use policy::{FieldViolation, InputPolicy, InputViolation};
