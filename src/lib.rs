//! **Cyber-risk scoring for threat questionnaires.**
//!
//! `riskgauge` turns questionnaire answers about an organisation's exposure to
//! known threats into per-threat risk scores, ranks them, and rolls them up
//! into a single overall risk rating.
//!
//! ## Key Features
//!
//! - **Per-threat scoring**: exposure, impact, likelihood and risk on a
//!   0-100 scale, each classified into critical, high, medium or low.
//! - **Aggregation**: a decay-weighted average that lets the worst threats
//!   dominate the overall score.
//! - **Input policies**: permissive by default, with opt-in clamping or
//!   strict rejection of out-of-range answers.
//! - **Reports**: terminal summary, JSON, CSV and HTML.
//!
//! ## Core Concepts & Modules
//!
//! - **[`scoring`]**: the pure scoring engine. It never fails and performs
//!   no I/O.
//! - **[`catalog`]**: threat catalogs and questionnaires loaded from YAML or
//!   JSON.
//! - **[`assessment`]**: joins a questionnaire with a catalog into an
//!   [`AssessmentReport`].
//! - **[`reports`]**: renders assessments in the supported output formats.
//! - **[`config`]**: the `.riskgauge.yaml` configuration layer.
//! - **[`pipeline`]**: load, assess and report stages shared by the CLI.
//!
//! ## Getting Started
//!
//! ```
//! use riskgauge::{aggregate_risk_scores, score_threat, RiskLevel};
//!
//! let ransomware = score_threat(5, 95.0, 0.0);
//! assert_eq!(ransomware.risk_score, 95);
//! assert_eq!(ransomware.risk_level, RiskLevel::Critical);
//!
//! let phishing = score_threat(3, 85.0, 0.5);
//! assert_eq!(phishing.risk_score, 23);
//!
//! let overall = aggregate_risk_scores(&[95.0, 23.0]);
//! assert_eq!(overall, 61);
//! ```
//!
//! ### Assessing a Questionnaire
//!
//! ```no_run
//! use std::path::Path;
//! use riskgauge::config::ScoringConfig;
//! use riskgauge::{AssessmentBuilder, Questionnaire, ThreatCatalog};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = ThreatCatalog::load(Path::new("threats.yaml"))?;
//!     let questionnaire = Questionnaire::load(Path::new("answers.yaml"))?;
//!
//!     let report = AssessmentBuilder::new(&catalog, &ScoringConfig::default())
//!         .build(&questionnaire)?;
//!
//!     println!(
//!         "{}: {}/100 ({})",
//!         report.name,
//!         report.overall_risk_score(),
//!         report.overall_risk_level().label()
//!     );
//!     for threat in &report.threats {
//!         println!("  #{} {} {}", threat.priority_rank, threat.threat_id, threat.risk_score());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores are bounded to 0-100 before every narrowing cast
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod assessment;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use assessment::{AssessmentBuilder, AssessmentReport, ThreatAssessment};
pub use catalog::{QuestionResponse, Questionnaire, Threat, ThreatCatalog};
pub use config::{
    AppConfig, AppConfigBuilder, ConfigError, ConfigOverrides, ConfigPreset, Validatable,
};
pub use error::{ErrorContext, Result, RiskError};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    aggregate_risk_scores, classify_risk_level, score_threat, AssessmentAggregate, InputPolicy,
    RiskLevel, ScoredThreat, ThreatResponse,
};
