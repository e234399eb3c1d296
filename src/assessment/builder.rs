//! Builds an [`AssessmentReport`] from a questionnaire and a threat catalog.

use super::report::{AssessmentReport, RiskDistribution, ThreatAssessment};
use crate::catalog::{QuestionResponse, Questionnaire, Threat, ThreatCatalog};
use crate::config::ScoringConfig;
use crate::error::{AssessmentErrorKind, Result, RiskError};
use crate::scoring::{AssessmentAggregate, RiskLevel, ThreatResponse};
use chrono::Utc;
use std::collections::HashSet;

/// Joins questionnaire answers with catalog severities and scores them.
pub struct AssessmentBuilder<'a> {
    catalog: &'a ThreatCatalog,
    scoring: &'a ScoringConfig,
}

impl<'a> AssessmentBuilder<'a> {
    #[must_use]
    pub const fn new(catalog: &'a ThreatCatalog, scoring: &'a ScoringConfig) -> Self {
        Self { catalog, scoring }
    }

    /// Score every response, rank threats and aggregate the overall score.
    ///
    /// Fails when a response names a threat missing from the catalog, when a
    /// threat is answered twice, or when the strict input policy rejects a
    /// response.
    pub fn build(&self, questionnaire: &Questionnaire) -> Result<AssessmentReport> {
        let context = format!("assessing '{}'", questionnaire.name);
        let mut seen = HashSet::with_capacity(questionnaire.responses.len());
        let mut threats = Vec::with_capacity(questionnaire.responses.len());

        for response in &questionnaire.responses {
            if !seen.insert(response.threat_id.as_str()) {
                return Err(RiskError::assessment(
                    context,
                    AssessmentErrorKind::DuplicateResponse(response.threat_id.clone()),
                ));
            }
            let threat = self.catalog.get(&response.threat_id).ok_or_else(|| {
                RiskError::assessment(
                    context.clone(),
                    AssessmentErrorKind::UnknownThreat(response.threat_id.clone()),
                )
            })?;
            let assessed = self
                .assess_threat(threat, response)
                .map_err(|kind| RiskError::assessment(context.clone(), kind))?;
            threats.push(assessed);
        }

        rank(&mut threats);

        let scores: Vec<f64> = threats
            .iter()
            .map(|t| f64::from(t.risk_score()))
            .collect();
        let overall = AssessmentAggregate::from_scores(&scores);
        let distribution = RiskDistribution::from_levels(threats.iter().map(|t| t.risk_level()));

        tracing::info!(
            "Assessment '{}': {} threats, overall risk {} ({})",
            questionnaire.name,
            threats.len(),
            overall.overall_risk_score,
            overall.overall_risk_level
        );

        Ok(AssessmentReport {
            id: questionnaire.id.clone(),
            name: questionnaire.name.clone(),
            description: questionnaire.description.clone(),
            industry: questionnaire.industry.clone(),
            compliance_frameworks: questionnaire.compliance_frameworks.clone(),
            created_by: questionnaire.created_by.clone(),
            overall,
            distribution,
            threats,
            generated_at: Utc::now(),
        })
    }

    fn assess_threat(
        &self,
        threat: &Threat,
        response: &QuestionResponse,
    ) -> std::result::Result<ThreatAssessment, AssessmentErrorKind> {
        let mitigation = response
            .mitigation_factor
            .unwrap_or(self.scoring.default_mitigation_factor);
        let input = self
            .scoring
            .input_policy
            .apply(
                ThreatResponse::new(response.response_value, threat.severity_base_score)
                    .with_mitigation(mitigation),
            )
            .map_err(|violation| AssessmentErrorKind::InputRejected {
                threat_id: threat.threat_id.clone(),
                violation,
            })?;

        let scores = input.score();
        tracing::debug!(
            threat = %threat.threat_id,
            exposure = scores.exposure_score,
            impact = scores.impact_score,
            likelihood = scores.likelihood_score,
            risk = scores.risk_score,
            level = %scores.risk_level,
            "Scored threat"
        );

        Ok(ThreatAssessment {
            threat_id: threat.threat_id.clone(),
            threat_name: threat.name.clone(),
            category: threat.category.clone(),
            priority_rank: 0,
            exposure_value: input.exposure_value,
            exposure_band: RiskLevel::from_exposure_value(input.exposure_value),
            mitigation_factor: input.mitigation_factor,
            scores,
            evidence: response.evidence.clone(),
            mitigated_by: response.mitigated_by.clone(),
            mitigation_recommendations: threat.mitigation_recommendations.clone(),
        })
    }
}

/// Order by risk score descending, ties by threat id, and number from 1.
fn rank(threats: &mut [ThreatAssessment]) {
    threats.sort_by(|a, b| {
        b.risk_score()
            .cmp(&a.risk_score())
            .then_with(|| a.threat_id.cmp(&b.threat_id))
    });
    for (idx, threat) in threats.iter_mut().enumerate() {
        threat.priority_rank = idx + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InputFormat;
    use crate::scoring::InputPolicy;

    fn catalog() -> ThreatCatalog {
        ThreatCatalog::from_str_with_format(
            r"
threats:
  - threat_id: T-PHISH
    name: Phishing
    category: Social Engineering
    severity_base_score: 85
    mitigation_recommendations: [Security awareness training]
  - threat_id: T-RANSOM
    name: Ransomware
    category: Malware
    severity_base_score: 95
  - threat_id: T-DDOS
    name: DDoS
    category: Availability
    severity_base_score: 60
  - threat_id: T-INSIDER
    name: Insider threat
    category: Personnel
    severity_base_score: 70
",
            InputFormat::Yaml,
        )
        .unwrap()
    }

    fn questionnaire(yaml: &str) -> Questionnaire {
        Questionnaire::from_str_with_format(yaml, InputFormat::Yaml).unwrap()
    }

    #[test]
    fn test_build_ranks_and_aggregates() {
        let catalog = catalog();
        let scoring = ScoringConfig::default();
        let q = questionnaire(
            r"
name: Annual review
industry: healthcare
responses:
  - threat_id: T-PHISH
    response_value: 3
  - threat_id: T-RANSOM
    response_value: 5
    mitigation_factor: 0
  - threat_id: T-DDOS
    response_value: 1
    mitigation_factor: 1
",
        );

        let report = AssessmentBuilder::new(&catalog, &scoring).build(&q).unwrap();

        let order: Vec<_> = report.threats.iter().map(|t| t.threat_id.as_str()).collect();
        assert_eq!(order, vec!["T-RANSOM", "T-PHISH", "T-DDOS"]);
        let ranks: Vec<_> = report.threats.iter().map(|t| t.priority_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        // 5/95/0: 100 * 95 * 100 / 10000 = 95
        assert_eq!(report.threats[0].risk_score(), 95);
        assert_eq!(report.threats[0].risk_level(), RiskLevel::Critical);
        // 3/85/default 0.5: 60 * 85 * 45 / 10000 = 22.95
        assert_eq!(report.threats[1].risk_score(), 23);
        assert!((report.threats[1].mitigation_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(report.threats[1].exposure_band, RiskLevel::High);
        // 1/60/1.0: 20 * 60 * 10 / 10000 = 1.2
        assert_eq!(report.threats[2].risk_score(), 1);

        // (95 + 23*0.9 + 1*0.81) / 2.71 = 42.94...
        assert_eq!(report.overall_risk_score(), 43);
        assert_eq!(report.overall_risk_level(), RiskLevel::Medium);
        assert_eq!(report.distribution.critical, 1);
        assert_eq!(report.distribution.low, 2);
        assert_eq!(report.industry_label(), "healthcare");
    }

    #[test]
    fn test_ties_break_on_threat_id() {
        let catalog = catalog();
        let scoring = ScoringConfig::default();
        let q = questionnaire(
            r"
name: ties
responses:
  - threat_id: T-RANSOM
    response_value: 0
  - threat_id: T-DDOS
    response_value: 0
",
        );
        let report = AssessmentBuilder::new(&catalog, &scoring).build(&q).unwrap();
        let order: Vec<_> = report.threats.iter().map(|t| t.threat_id.as_str()).collect();
        assert_eq!(order, vec!["T-DDOS", "T-RANSOM"]);
        assert_eq!(report.overall_risk_score(), 0);
    }

    #[test]
    fn test_empty_questionnaire() {
        let catalog = catalog();
        let scoring = ScoringConfig::default();
        let report = AssessmentBuilder::new(&catalog, &scoring)
            .build(&questionnaire("name: nothing answered\n"))
            .unwrap();
        assert!(report.threats.is_empty());
        assert_eq!(report.overall_risk_score(), 0);
        assert_eq!(report.overall_risk_level(), RiskLevel::Low);
        assert_eq!(report.distribution.total(), 0);
    }

    #[test]
    fn test_unknown_threat() {
        let catalog = catalog();
        let scoring = ScoringConfig::default();
        let q = questionnaire("name: x\nresponses:\n  - threat_id: T-NOPE\n    response_value: 2\n");
        let err = AssessmentBuilder::new(&catalog, &scoring).build(&q).unwrap_err();
        assert!(
            matches!(
                err,
                RiskError::Assessment {
                    source: AssessmentErrorKind::UnknownThreat(ref id),
                    ..
                } if id == "T-NOPE"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn test_duplicate_response_in_unvalidated_questionnaire() {
        let catalog = catalog();
        let scoring = ScoringConfig::default();
        let response = QuestionResponse {
            threat_id: "T-DDOS".to_string(),
            response_value: 1,
            evidence: None,
            mitigated_by: None,
            mitigation_factor: None,
        };
        let q = Questionnaire {
            id: None,
            name: "dup".to_string(),
            description: None,
            industry: None,
            compliance_frameworks: Vec::new(),
            created_by: None,
            responses: vec![response.clone(), response],
        };
        let err = AssessmentBuilder::new(&catalog, &scoring).build(&q).unwrap_err();
        assert!(matches!(
            err,
            RiskError::Assessment {
                source: AssessmentErrorKind::DuplicateResponse(_),
                ..
            }
        ));
    }

    #[test]
    fn test_policies_on_out_of_range_answer() {
        let catalog = catalog();
        let q = questionnaire(
            "name: x\nresponses:\n  - threat_id: T-PHISH\n    response_value: 7\n    mitigation_factor: 0\n",
        );

        let permissive = ScoringConfig::default();
        let report = AssessmentBuilder::new(&catalog, &permissive).build(&q).unwrap();
        // 140 * 85 * 140 / 10000 = 166.6, capped
        assert_eq!(report.threats[0].risk_score(), 100);
        assert_eq!(report.threats[0].scores.exposure_score, 100);

        let clamp = ScoringConfig {
            input_policy: InputPolicy::Clamp,
            ..ScoringConfig::default()
        };
        let report = AssessmentBuilder::new(&catalog, &clamp).build(&q).unwrap();
        assert_eq!(report.threats[0].exposure_value, 5);
        assert_eq!(report.threats[0].risk_score(), 85);

        let strict = ScoringConfig {
            input_policy: InputPolicy::Strict,
            ..ScoringConfig::default()
        };
        let err = AssessmentBuilder::new(&catalog, &strict).build(&q).unwrap_err();
        match err {
            RiskError::Assessment {
                source: AssessmentErrorKind::InputRejected { threat_id, violation },
                ..
            } => {
                assert_eq!(threat_id, "T-PHISH");
                assert_eq!(violation.violations[0].field, "exposure_value");
            }
            other => panic!("Expected InputRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_configured_default_mitigation() {
        let catalog = catalog();
        let scoring = ScoringConfig {
            default_mitigation_factor: 0.0,
            ..ScoringConfig::default()
        };
        let q = questionnaire("name: x\nresponses:\n  - threat_id: T-RANSOM\n    response_value: 5\n");
        let report = AssessmentBuilder::new(&catalog, &scoring).build(&q).unwrap();
        assert_eq!(report.threats[0].scores.likelihood_score, 100);
        assert_eq!(report.threats[0].risk_score(), 95);
    }

    #[test]
    fn test_recommendations_carried_over() {
        let catalog = catalog();
        let scoring = ScoringConfig::default();
        let q = questionnaire(
            "name: x\nresponses:\n  - threat_id: T-PHISH\n    response_value: 2\n    evidence: MFA on email\n",
        );
        let report = AssessmentBuilder::new(&catalog, &scoring).build(&q).unwrap();
        let threat = &report.threats[0];
        assert_eq!(threat.evidence.as_deref(), Some("MFA on email"));
        assert_eq!(
            threat.mitigation_recommendations,
            vec!["Security awareness training"]
        );
        assert_eq!(threat.category, "Social Engineering");
    }
}
