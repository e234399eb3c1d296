//! Aggregate command handler.

use crate::pipeline::exit_codes;
use crate::scoring::AssessmentAggregate;
use anyhow::{bail, Result};
use serde_json::json;

/// Run the aggregate command, returning the desired exit code.
pub fn run_aggregate(scores: &[f64], json: bool) -> Result<i32> {
    if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
        bail!("Risk scores must be finite numbers, got {bad}");
    }

    let aggregate = AssessmentAggregate::from_scores(scores);
    tracing::debug!(count = scores.len(), ?aggregate, "Aggregated risk scores");

    println!("{}", render_aggregate(&aggregate, scores.len(), json)?);
    Ok(exit_codes::SUCCESS)
}

fn render_aggregate(aggregate: &AssessmentAggregate, count: usize, json: bool) -> Result<String> {
    if json {
        let value = json!({
            "threats": count,
            "overallRiskScore": aggregate.overall_risk_score,
            "overallRiskLevel": aggregate.overall_risk_level,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(format!(
        "Overall risk: {}/100 ({}) across {} threats",
        aggregate.overall_risk_score,
        aggregate.overall_risk_level.label(),
        count
    ))
}
