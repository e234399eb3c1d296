//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use crate::scoring::RiskLevel;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Terminal color for a risk level
const fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => "red",
        RiskLevel::High => "magenta",
        RiskLevel::Medium => "yellow",
        RiskLevel::Low => "green",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn level(&self, level: RiskLevel) -> String {
        self.color(level.label(), level_color(level))
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {}",
            self.color("Assessment:", "cyan"),
            report.name
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Industry:", "cyan"),
            report.industry_label()
        ));
        if !report.compliance_frameworks.is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Frameworks:", "cyan"),
                report.compliance_frameworks.join(", ")
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "{}  {}/100 ({})",
            self.color("Overall risk:", "bold"),
            report.overall_risk_score(),
            self.level(report.overall_risk_level())
        ));

        let distribution = RiskLevel::all()
            .iter()
            .map(|level| {
                format!(
                    "{} {}",
                    report.distribution.count(*level),
                    self.level(*level)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{}  {} ({})",
            self.color("Threats:", "bold"),
            report.threats.len(),
            distribution
        ));

        if report.threats.is_empty() {
            lines.push(format!("  {}", self.color("No threats assessed", "dim")));
        } else {
            lines.push(String::new());
            lines.push(self.color("Top threats:", "bold"));

            let visible = config.visible_threats(report.threats.len());
            for threat in report.threats.iter().take(visible) {
                lines.push(format!(
                    "  {:>2}. {:<32} {:>3}  {}",
                    threat.priority_rank,
                    threat.threat_name,
                    threat.risk_score(),
                    self.level(threat.risk_level())
                ));
            }
            if visible < report.threats.len() {
                lines.push(format!(
                    "  {}",
                    self.color(
                        &format!("... and {} more", report.threats.len() - visible),
                        "dim"
                    )
                ));
            }
        }

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_plain_summary() {
        let summary = SummaryReporter::new()
            .no_color()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();

        assert!(!summary.contains('\x1b'));
        assert!(summary.contains("Assessment:  Q3 & Q4 review"));
        assert!(summary.contains("Overall risk:  44/100 (Medium)"));
        assert!(summary.contains("Threats:  2 (0 Critical, 1 High, 0 Medium, 1 Low)"));
        assert!(summary.contains("1. Ransomware \"Locky\""));
    }

    #[test]
    fn test_colored_summary() {
        let summary = SummaryReporter::new()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(summary.contains("\x1b[33mMedium\x1b[0m"));
        assert!(summary.contains("\x1b[35mHigh\x1b[0m"));
    }

    #[test]
    fn test_summary_truncates() {
        let config = ReportConfig {
            max_threats: Some(1),
            ..ReportConfig::default()
        };
        let summary = SummaryReporter::new()
            .no_color()
            .generate(&sample_report(), &config)
            .unwrap();
        assert!(!summary.contains("<Phishing>"));
        assert!(summary.contains("... and 1 more"));
    }

    #[test]
    fn test_empty_assessment() {
        let mut report = sample_report();
        report.threats.clear();
        let summary = SummaryReporter::new()
            .no_color()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(summary.contains("No threats assessed"));
    }
}
