//! Named configuration presets.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig};
use crate::reports::ReportFormat;
use crate::scoring::{InputPolicy, RiskLevel};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Permissive scoring, terminal summary
    Default,
    /// Reject out-of-range answers
    Strict,
    /// JSON output, fail the build at high risk or above
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Score every answer as given and print a terminal summary",
            Self::Strict => "Reject answers outside the 0-5 scale and out-of-range mitigation",
            Self::CiCd => "JSON output, exit code 2 at high risk or above",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Strict preset: out-of-range answers fail the assessment.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            scoring: ScoringConfig {
                input_policy: InputPolicy::Strict,
                ..ScoringConfig::default()
            },
            ..Self::default()
        }
    }

    /// CI/CD preset.
    ///
    /// - Inputs clamped so a stray answer never aborts a pipeline
    /// - JSON output without color
    /// - Exit code 2 when the overall level is high or critical
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            scoring: ScoringConfig {
                input_policy: InputPolicy::Clamp,
                ..ScoringConfig::default()
            },
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on: Some(RiskLevel::High),
                quiet: true,
            },
            ..Self::default()
        }
    }
}
