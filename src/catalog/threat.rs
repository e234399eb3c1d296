//! Threat catalog: static per-threat metadata.

use super::format::{parse_str, read_file, InputFormat};
use crate::error::{LoadErrorKind, Result, RiskError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A catalogued threat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    /// Stable identifier referenced by questionnaire responses
    #[serde(alias = "id")]
    pub threat_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Inherent severity, 0-100
    #[serde(alias = "severity")]
    pub severity_base_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_vector: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_systems: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mitigation_recommendations: Vec<String>,
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    threats: Vec<Threat>,
}

/// Threats keyed by `threat_id`, in file order.
#[derive(Debug, Clone, Default)]
pub struct ThreatCatalog {
    threats: IndexMap<String, Threat>,
}

impl ThreatCatalog {
    /// Build a catalog, rejecting duplicate or empty ids.
    pub fn from_threats(threats: Vec<Threat>) -> Result<Self> {
        let mut map = IndexMap::with_capacity(threats.len());
        for threat in threats {
            if threat.threat_id.trim().is_empty() {
                return Err(RiskError::missing_field(
                    "threat_id",
                    format!("threat '{}'", threat.name),
                ));
            }
            if map.contains_key(&threat.threat_id) {
                return Err(RiskError::load(
                    "building threat catalog",
                    LoadErrorKind::DuplicateThreat(threat.threat_id),
                ));
            }
            map.insert(threat.threat_id.clone(), threat);
        }
        Ok(Self { threats: map })
    }

    /// Parse a catalog document (`threats:` list) from a string.
    pub fn from_str_with_format(content: &str, format: InputFormat) -> Result<Self> {
        let file: CatalogFile = parse_str(content, format)?;
        Self::from_threats(file.threats)
    }

    /// Load a catalog from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file: CatalogFile = read_file(path)?;
        let catalog = Self::from_threats(file.threats)?;
        tracing::info!(
            "Loaded {} threats from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, threat_id: &str) -> Option<&Threat> {
        self.threats.get(threat_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.threats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }

    /// Threats in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Threat> {
        self.threats.values()
    }

    /// Threats ordered by severity, highest first (ties by id).
    #[must_use]
    pub fn by_severity(&self) -> Vec<&Threat> {
        let mut threats: Vec<&Threat> = self.threats.values().collect();
        threats.sort_by(|a, b| {
            b.severity_base_score
                .total_cmp(&a.severity_base_score)
                .then_with(|| a.threat_id.cmp(&b.threat_id))
        });
        threats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_YAML: &str = r"
threats:
  - threat_id: T-PHISH
    name: Phishing
    category: Social Engineering
    severity_base_score: 85
    affected_systems: [email]
  - id: T-RANSOM
    name: Ransomware
    severity: 95
  - threat_id: T-DDOS
    name: DDoS
    severity_base_score: 60
";

    #[test]
    fn test_parse_yaml_catalog() {
        let catalog = ThreatCatalog::from_str_with_format(CATALOG_YAML, InputFormat::Yaml).unwrap();
        assert_eq!(catalog.len(), 3);

        let ransom = catalog.get("T-RANSOM").unwrap();
        assert_eq!(ransom.name, "Ransomware");
        assert!((ransom.severity_base_score - 95.0).abs() < f64::EPSILON);
        assert!(ransom.description.is_empty());

        let ids: Vec<_> = catalog.iter().map(|t| t.threat_id.as_str()).collect();
        assert_eq!(ids, vec!["T-PHISH", "T-RANSOM", "T-DDOS"]);
    }

    #[test]
    fn test_by_severity_orders_descending() {
        let catalog = ThreatCatalog::from_str_with_format(CATALOG_YAML, InputFormat::Yaml).unwrap();
        let ids: Vec<_> = catalog
            .by_severity()
            .iter()
            .map(|t| t.threat_id.as_str())
            .collect();
        assert_eq!(ids, vec!["T-RANSOM", "T-PHISH", "T-DDOS"]);
    }

    #[test]
    fn test_duplicate_threat_rejected() {
        let json = r#"{"threats": [
            {"threat_id": "T-1", "name": "a", "severity_base_score": 10},
            {"threat_id": "T-1", "name": "b", "severity_base_score": 20}
        ]}"#;
        let err = ThreatCatalog::from_str_with_format(json, InputFormat::Json).unwrap_err();
        assert!(
            matches!(
                err,
                RiskError::Load {
                    source: LoadErrorKind::DuplicateThreat(ref id),
                    ..
                } if id == "T-1"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn test_empty_threat_id_rejected() {
        let json = r#"{"threats": [{"threat_id": " ", "name": "a", "severity_base_score": 10}]}"#;
        assert!(ThreatCatalog::from_str_with_format(json, InputFormat::Json).is_err());
    }

    #[test]
    fn test_missing_severity_is_parse_error() {
        let json = r#"{"threats": [{"threat_id": "T-1", "name": "a"}]}"#;
        let err = ThreatCatalog::from_str_with_format(json, InputFormat::Json).unwrap_err();
        assert!(matches!(err, RiskError::Load { .. }), "{err:?}");
    }
}
