//! Catalog command handler.
//!
//! Lists the threats of a catalog, most severe first.

use crate::catalog::{Threat, ThreatCatalog};
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_catalog, resolve_catalog_path, write_output, OutputTarget};
use crate::reports::escape::csv_cell;
use crate::reports::ReportFormat;
use crate::scoring::classify_risk_level;
use anyhow::{bail, Result};
use std::fmt::Write;
use std::path::PathBuf;

/// Run the catalog command, returning the desired exit code.
pub fn run_catalog(
    config: &AppConfig,
    catalog: Option<PathBuf>,
    format: ReportFormat,
) -> Result<i32> {
    let path = resolve_catalog_path(catalog.as_deref(), &config.catalog)?;
    let catalog = load_catalog(&path, config.behavior.quiet)?;

    let content = render_catalog(&catalog, format)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&content, &target, config.behavior.quiet)?;
    Ok(exit_codes::SUCCESS)
}

fn render_catalog(catalog: &ThreatCatalog, format: ReportFormat) -> Result<String> {
    let threats = catalog.by_severity();
    match format {
        ReportFormat::Summary => Ok(render_table(&threats)?),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&threats)?),
        ReportFormat::Csv => Ok(render_csv(&threats)?),
        ReportFormat::Html => bail!("HTML output is only available for assessments"),
    }
}

fn render_table(threats: &[&Threat]) -> Result<String, std::fmt::Error> {
    let id_width = threats
        .iter()
        .map(|t| t.threat_id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut out = String::new();
    writeln!(
        out,
        "{:<id_width$}  {:>8}  {:<8}  {:<16}  NAME",
        "ID", "SEVERITY", "BAND", "CATEGORY"
    )?;
    for threat in threats {
        writeln!(
            out,
            "{:<id_width$}  {:>8.1}  {:<8}  {:<16}  {}",
            threat.threat_id,
            threat.severity_base_score,
            classify_risk_level(threat.severity_base_score).label(),
            threat.category,
            threat.name
        )?;
    }
    write!(out, "\n{} threats", threats.len())?;
    Ok(out)
}

fn render_csv(threats: &[&Threat]) -> Result<String, std::fmt::Error> {
    let mut out = String::from("\"Threat ID\",\"Name\",\"Category\",\"Severity\"\n");
    for threat in threats {
        writeln!(
            out,
            "{},{},{},\"{:.2}\"",
            csv_cell(&threat.threat_id),
            csv_cell(&threat.name),
            csv_cell(&threat.category),
            threat.severity_base_score
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InputFormat;

    fn catalog() -> ThreatCatalog {
        ThreatCatalog::from_str_with_format(
            r#"
threats:
  - threat_id: T-PHISH
    name: Phishing
    category: Social
    severity_base_score: 62
  - threat_id: T-RANSOM
    name: Ransomware, "Locky"
    category: Malware
    severity_base_score: 95
"#,
            InputFormat::Yaml,
        )
        .unwrap()
    }

    #[test]
    fn test_table_orders_by_severity() {
        let table = render_catalog(&catalog(), ReportFormat::Summary).unwrap();
        let ransom = table.find("T-RANSOM").unwrap();
        let phish = table.find("T-PHISH").unwrap();
        assert!(ransom < phish);
        assert!(table.contains("Critical"));
        assert!(table.ends_with("2 threats"));
    }

    #[test]
    fn test_csv_quotes_cells() {
        let csv = render_catalog(&catalog(), ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            r#""T-RANSOM","Ransomware, ""Locky""","Malware","95.00""#
        );
    }

    #[test]
    fn test_json_lists_threats() {
        let json = render_catalog(&catalog(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["threat_id"], "T-RANSOM");
        assert_eq!(value[1]["severity_base_score"], 62.0);
    }

    #[test]
    fn test_empty_catalog_renders() {
        assert_eq!(render_table(&[]).unwrap().lines().last(), Some("0 threats"));
        assert_eq!(render_csv(&[]).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_html_unsupported() {
        assert!(render_catalog(&catalog(), ReportFormat::Html).is_err());
    }
}
