//! Input policy applied in front of the scoring engine.
//!
//! The engine itself accepts any numeric input. Callers that want stronger
//! guarantees choose a policy: clamp inputs into their documented domains,
//! or reject them outright.

use super::engine::{DEFAULT_MITIGATION_FACTOR, MAX_EXPOSURE_VALUE, MAX_SCORE, ThreatResponse};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How out-of-domain scoring inputs are handled
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Pass values through unchanged
    #[default]
    Permissive,
    /// Clamp each value into its domain
    Clamp,
    /// Reject out-of-domain values
    Strict,
}

impl InputPolicy {
    /// Apply this policy to a response before scoring.
    pub fn apply(&self, response: ThreatResponse) -> Result<ThreatResponse, InputViolation> {
        match self {
            Self::Permissive => Ok(response),
            Self::Clamp => Ok(clamp_response(response)),
            Self::Strict => {
                let violations = check_response(&response);
                if violations.is_empty() {
                    Ok(response)
                } else {
                    Err(InputViolation { violations })
                }
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Clamp => "clamp",
            Self::Strict => "strict",
        }
    }
}

impl std::fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single field outside its domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={} (expected {})", self.field, self.value, self.expected)
    }
}

/// Rejection produced by [`InputPolicy::Strict`]
#[derive(Error, Debug, Clone, PartialEq)]
#[error("scoring input out of range: {}", join_violations(.violations))]
pub struct InputViolation {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn clamp_response(response: ThreatResponse) -> ThreatResponse {
    let threat_severity = if response.threat_severity.is_nan() {
        0.0
    } else {
        response.threat_severity.clamp(0.0, MAX_SCORE)
    };
    let mitigation_factor = if response.mitigation_factor.is_nan() {
        DEFAULT_MITIGATION_FACTOR
    } else {
        response.mitigation_factor.clamp(0.0, 1.0)
    };

    ThreatResponse {
        exposure_value: response.exposure_value.clamp(0, MAX_EXPOSURE_VALUE),
        threat_severity,
        mitigation_factor,
    }
}

fn check_response(response: &ThreatResponse) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !(0..=MAX_EXPOSURE_VALUE).contains(&response.exposure_value) {
        violations.push(FieldViolation {
            field: "exposure_value",
            value: response.exposure_value.to_string(),
            expected: "0-5",
        });
    }
    if !(0.0..=MAX_SCORE).contains(&response.threat_severity) {
        violations.push(FieldViolation {
            field: "threat_severity",
            value: response.threat_severity.to_string(),
            expected: "0-100",
        });
    }
    if !(0.0..=1.0).contains(&response.mitigation_factor) {
        violations.push(FieldViolation {
            field: "mitigation_factor",
            value: response.mitigation_factor.to_string(),
            expected: "0.0-1.0",
        });
    }

    violations
}
