//! Questionnaire: one assessment's answers.

use super::format::{parse_str, read_file, InputFormat};
use crate::error::{ErrorContext, Result, RiskError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Answer to a single threat question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResponse {
    #[serde(alias = "threatId")]
    pub threat_id: String,
    /// Exposure answer on the 0-5 scale
    #[serde(alias = "responseValue")]
    pub response_value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(
        default,
        alias = "mitigatedBy",
        skip_serializing_if = "Option::is_none"
    )]
    pub mitigated_by: Option<String>,
    /// Effectiveness of controls, 0.0-1.0; the configured default when absent
    #[serde(
        default,
        alias = "mitigationFactor",
        skip_serializing_if = "Option::is_none"
    )]
    pub mitigation_factor: Option<f64>,
}

/// A filled-in assessment questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, alias = "complianceFrameworks")]
    pub compliance_frameworks: Vec<String>,
    #[serde(
        default,
        alias = "createdBy",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<String>,
    #[serde(default)]
    pub responses: Vec<QuestionResponse>,
}

impl Questionnaire {
    /// Parse and validate a questionnaire from a string.
    pub fn from_str_with_format(content: &str, format: InputFormat) -> Result<Self> {
        let questionnaire: Self = parse_str(content, format)?;
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    /// Load and validate a questionnaire file.
    pub fn load(path: &Path) -> Result<Self> {
        let questionnaire: Self = read_file(path)?;
        questionnaire
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        tracing::info!(
            "Loaded questionnaire '{}' with {} responses",
            questionnaire.name,
            questionnaire.responses.len()
        );
        Ok(questionnaire)
    }

    /// Check the questionnaire is well formed.
    ///
    /// The assessment needs a name, and each threat may be answered once.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RiskError::validation("Assessment name is required"));
        }

        let mut seen = HashSet::with_capacity(self.responses.len());
        for response in &self.responses {
            if !seen.insert(response.threat_id.as_str()) {
                return Err(RiskError::validation(format!(
                    "threat '{}' answered more than once",
                    response.threat_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_json() {
        let json = r#"{
            "name": "Q3 review",
            "industry": "finance",
            "complianceFrameworks": ["SOC 2", "PCI DSS"],
            "createdBy": "security-team",
            "responses": [
                {"threatId": "T-PHISH", "responseValue": 4, "mitigationFactor": 0.2},
                {"threat_id": "T-DDOS", "response_value": 1, "evidence": "CDN in place"}
            ]
        }"#;
        let q = Questionnaire::from_str_with_format(json, InputFormat::Json).unwrap();
        assert_eq!(q.name, "Q3 review");
        assert_eq!(q.compliance_frameworks, vec!["SOC 2", "PCI DSS"]);
        assert_eq!(q.created_by.as_deref(), Some("security-team"));
        assert_eq!(q.responses.len(), 2);
        assert_eq!(q.responses[0].mitigation_factor, Some(0.2));
        assert_eq!(q.responses[1].mitigation_factor, None);
        assert_eq!(q.responses[1].evidence.as_deref(), Some("CDN in place"));
    }

    #[test]
    fn test_name_required() {
        let yaml = "name: '  '\nresponses: []\n";
        match Questionnaire::from_str_with_format(yaml, InputFormat::Yaml) {
            Err(RiskError::Validation(msg)) => assert_eq!(msg, "Assessment name is required"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_response_rejected() {
        let yaml = r"
name: dup
responses:
  - threat_id: T-1
    response_value: 2
  - threat_id: T-1
    response_value: 3
";
        let err = Questionnaire::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("T-1"), "{err}");
    }

    #[test]
    fn test_empty_responses_allowed() {
        let q = Questionnaire::from_str_with_format("name: empty\n", InputFormat::Yaml).unwrap();
        assert!(q.responses.is_empty());
    }
}
