//! Risk level classification.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the critical band
pub const CRITICAL_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) of the high band
pub const HIGH_THRESHOLD: f64 = 60.0;
/// Lower bound (inclusive) of the medium band
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// Ordinal risk classification derived from a 0-100 risk score.
///
/// Variants are declared in ascending order so `Ord` follows severity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Below 40
    Low,
    /// 40-59
    Medium,
    /// 60-79
    High,
    /// 80 and above
    Critical,
}

impl RiskLevel {
    /// Classify a risk score using the fixed breakpoints.
    ///
    /// Total over every `f64`: out-of-range values fall into the nearest
    /// band and `NaN` classifies as [`RiskLevel::Low`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Band for a raw questionnaire answer (0-5 exposure scale).
    ///
    /// This is the level recorded alongside each questionnaire answer,
    /// independent of the threat's severity.
    #[must_use]
    pub const fn from_exposure_value(value: i32) -> Self {
        if value >= 4 {
            Self::Critical
        } else if value >= 3 {
            Self::High
        } else if value >= 2 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Lowercase name, as stored and serialized
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Capitalized label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Presentation color (red, orange, yellow, green)
    #[must_use]
    pub const fn color_hex(&self) -> &'static str {
        match self {
            Self::Critical => "#ef4444",
            Self::High => "#f97316",
            Self::Medium => "#eab308",
            Self::Low => "#22c55e",
        }
    }

    /// All levels, most severe first
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
