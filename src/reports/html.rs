//! HTML report generator.

use super::escape::{escape_html, escape_html_opt};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::{AssessmentReport, ThreatAssessment};
use crate::scoring::RiskLevel;
use chrono::SecondsFormat;
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn get_styles() -> &'static str {
        r#"
        <style>
            :root {
                --text-color: #1f2937;
                --muted-color: #6b7280;
                --accent-color: #3b82f6;
                --border-color: #e5e7eb;
                --card-bg: #f3f4f6;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1 {
                border-bottom: 2px solid var(--accent-color);
                padding-bottom: 10px;
            }

            .metadata {
                background-color: var(--card-bg);
                padding: 15px;
                border-radius: 8px;
                margin: 20px 0;
            }

            .metadata p { margin: 5px 0; }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 20px;
                margin-bottom: 30px;
            }

            .card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 15px;
            }

            .card-title {
                font-size: 0.9em;
                color: var(--muted-color);
                margin-bottom: 10px;
            }

            .card-value {
                font-size: 2em;
                font-weight: bold;
                color: var(--accent-color);
            }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
            }

            th {
                background-color: var(--accent-color);
                color: white;
                padding: 12px;
                text-align: left;
            }

            td {
                border-bottom: 1px solid var(--border-color);
                padding: 12px;
            }

            tr:hover { background-color: #f9fafb; }

            .badge {
                display: inline-block;
                padding: 4px 8px;
                border-radius: 4px;
                color: white;
                font-weight: bold;
            }

            .footer {
                margin-top: 30px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                color: var(--muted-color);
            }
        </style>
        "#
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = config.title_or_default();
        let generated = report
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            html,
            "    <title>{} - {}</title>",
            escape_html(title),
            escape_html(&report.name)
        )?;
        writeln!(html, "{}", Self::get_styles())?;
        writeln!(html, "    <style>")?;
        for level in RiskLevel::all() {
            writeln!(
                html,
                "        .badge-{} {{ background-color: {}; }}",
                level.name(),
                level.color_hex()
            )?;
        }
        writeln!(html, "    </style>")?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;
        writeln!(html, "<h1>{}</h1>", escape_html(title))?;

        // Metadata
        writeln!(html, "<div class=\"metadata\">")?;
        writeln!(
            html,
            "    <p><strong>Assessment:</strong> {}</p>",
            escape_html(&report.name)
        )?;
        writeln!(
            html,
            "    <p><strong>Industry:</strong> {}</p>",
            escape_html_opt(report.industry.as_deref())
        )?;
        writeln!(
            html,
            "    <p><strong>Compliance Frameworks:</strong> {}</p>",
            escape_html(&report.compliance_frameworks.join(", "))
        )?;
        if let Some(ref created_by) = report.created_by {
            writeln!(
                html,
                "    <p><strong>Created By:</strong> {}</p>",
                escape_html(created_by)
            )?;
        }
        writeln!(html, "    <p><strong>Generated:</strong> {generated}</p>")?;
        writeln!(html, "</div>")?;

        // Summary cards
        writeln!(html, "<div class=\"summary-cards\">")?;
        write_card(
            &mut html,
            "Overall Risk Score",
            &format!("{:.1}/100", f64::from(report.overall_risk_score())),
        )?;
        write_card(
            &mut html,
            "Overall Risk Level",
            &level_badge(report.overall_risk_level()),
        )?;
        write_card(
            &mut html,
            "Threats Assessed",
            &report.threats.len().to_string(),
        )?;
        writeln!(html, "</div>")?;

        // Distribution
        writeln!(html, "<h2>Risk Distribution</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "    <thead><tr><th>Risk Level</th><th>Threats</th></tr></thead>")?;
        writeln!(html, "    <tbody>")?;
        for level in RiskLevel::all() {
            writeln!(
                html,
                "        <tr><td>{}</td><td>{}</td></tr>",
                level_badge(*level),
                report.distribution.count(*level)
            )?;
        }
        writeln!(html, "    </tbody>")?;
        writeln!(html, "</table>")?;

        // Threats
        writeln!(html, "<h2>Threat Risk Summary</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "    <thead>")?;
        writeln!(
            html,
            "        <tr><th>Rank</th><th>Threat Name</th><th>Category</th><th>Risk Level</th>\
             <th>Risk Score</th><th>Exposure</th><th>Impact</th><th>Likelihood</th></tr>"
        )?;
        writeln!(html, "    </thead>")?;
        writeln!(html, "    <tbody>")?;
        let visible = config.visible_threats(report.threats.len());
        for threat in report.threats.iter().take(visible) {
            write_threat_row(&mut html, threat)?;
        }
        writeln!(html, "    </tbody>")?;
        writeln!(html, "</table>")?;
        if visible < report.threats.len() {
            writeln!(
                html,
                "<p>... and {} more threats</p>",
                report.threats.len() - visible
            )?;
        }

        writeln!(
            html,
            "<div class=\"footer\">Generated by riskgauge v{} on {generated}</div>",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

fn write_card(html: &mut String, title: &str, value: &str) -> std::fmt::Result {
    writeln!(html, "    <div class=\"card\">")?;
    writeln!(html, "        <div class=\"card-title\">{title}</div>")?;
    writeln!(html, "        <div class=\"card-value\">{value}</div>")?;
    writeln!(html, "    </div>")
}

fn write_threat_row(html: &mut String, threat: &ThreatAssessment) -> std::fmt::Result {
    let scores = &threat.scores;
    writeln!(
        html,
        "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>",
        threat.priority_rank,
        escape_html(&threat.threat_name),
        escape_html(&threat.category),
        level_badge(scores.risk_level),
        f64::from(scores.risk_score),
        f64::from(scores.exposure_score),
        f64::from(scores.impact_score),
        f64::from(scores.likelihood_score)
    )
}

fn level_badge(level: RiskLevel) -> String {
    format!(
        "<span class=\"badge badge-{}\">{}</span>",
        level.name(),
        level.label()
    )
}
