//! Configuration types for riskgauge.

use crate::reports::{ReportConfig, ReportFormat};
use crate::scoring::{InputPolicy, RiskLevel, DEFAULT_MITIGATION_FACTOR};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// Command-line values are layered over file settings with
/// [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring inputs (default mitigation, input policy)
    pub scoring: ScoringConfig,
    /// Threat catalog location
    pub catalog: CatalogConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the mitigation factor used when a response omits one.
    pub const fn default_mitigation_factor(mut self, factor: f64) -> Self {
        self.config.scoring.default_mitigation_factor = factor;
        self
    }

    /// Set the input policy.
    pub const fn input_policy(mut self, policy: InputPolicy) -> Self {
        self.config.scoring.input_policy = policy;
        self
    }

    /// Set the threat catalog path.
    pub fn catalog_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalog.path = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the report title.
    pub fn report_title(mut self, title: Option<String>) -> Self {
        self.config.output.title = title;
        self
    }

    /// Limit the threats listed in summary and HTML reports.
    pub const fn max_threats(mut self, max: Option<usize>) -> Self {
        self.config.output.max_threats = max;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail when the overall level reaches `level`.
    pub const fn fail_on(mut self, level: Option<RiskLevel>) -> Self {
        self.config.behavior.fail_on = level;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given explicitly on the command line.
///
/// `None` keeps the file (or default) value. `Some` always replaces it, even
/// when it equals the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub input_policy: Option<InputPolicy>,
    pub output_format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub report_title: Option<String>,
    pub max_threats: Option<usize>,
    pub fail_on: Option<RiskLevel>,
    /// Only ever switches color off
    pub no_color: bool,
    /// Only ever switches quiet mode on
    pub quiet: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Scoring configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Mitigation factor for responses that do not specify one (0.0-1.0)
    #[schemars(range(min = 0.0, max = 1.0))]
    pub default_mitigation_factor: f64,
    /// Handling of out-of-range inputs: permissive, clamp, strict
    pub input_policy: InputPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_mitigation_factor: DEFAULT_MITIGATION_FACTOR,
            input_policy: InputPolicy::default(),
        }
    }
}

/// Threat catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the threat catalog (YAML or JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Report heading (defaults to "Cyber Risk Assessment Report")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Maximum threats listed in summary and HTML reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_threats: Option<usize>,
}

impl OutputConfig {
    /// Report generator settings for this output
    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            title: self.title.clone(),
            max_threats: self.max_threats,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 2 when the overall risk level is at or above this level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<RiskLevel>,
    /// Suppress non-essential output
    pub quiet: bool,
}
