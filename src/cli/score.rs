//! Score command handler.
//!
//! Implements the `score` subcommand: score a single threat from its
//! exposure answer and severity.

use crate::config::ScoringConfig;
use crate::error::RiskError;
use crate::scoring::{ScoredThreat, ThreatResponse};
use anyhow::Result;
use serde_json::json;

/// Run the score command, returning the desired exit code.
pub fn run_score(
    scoring: &ScoringConfig,
    exposure_value: i32,
    severity: f64,
    mitigation: Option<f64>,
    json: bool,
) -> Result<i32> {
    let response = ThreatResponse::new(exposure_value, severity)
        .with_mitigation(mitigation.unwrap_or(scoring.default_mitigation_factor));
    let response = scoring
        .input_policy
        .apply(response)
        .map_err(RiskError::from)?;

    let scored = response.score();
    tracing::debug!(?response, ?scored, "Scored single threat");

    println!("{}", render_score(&response, &scored, json)?);
    Ok(crate::pipeline::exit_codes::SUCCESS)
}

fn render_score(response: &ThreatResponse, scored: &ScoredThreat, json: bool) -> Result<String> {
    if json {
        let value = json!({
            "input": response,
            "exposureScore": scored.exposure_score,
            "impactScore": scored.impact_score,
            "likelihoodScore": scored.likelihood_score,
            "riskScore": scored.risk_score,
            "riskLevel": scored.risk_level,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(format!(
        "Exposure:    {}\nImpact:      {}\nLikelihood:  {}\nRisk:        {} ({})",
        scored.exposure_score,
        scored.impact_score,
        scored.likelihood_score,
        scored.risk_score,
        scored.risk_level.label()
    ))
}
