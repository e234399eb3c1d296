//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Standalone HTML report
    Html,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum threats listed in the summary and HTML table
    pub max_threats: Option<usize>,
}

impl ReportConfig {
    /// Title, or the default report heading
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or("Cyber Risk Assessment Report")
    }

    /// Number of threats to list out of `total`
    #[must_use]
    pub fn visible_threats(&self, total: usize) -> usize {
        self.max_threats.map_or(total, |max| max.min(total))
    }
}
