//! Assessment building.
//!
//! An assessment joins a [`Questionnaire`](crate::catalog::Questionnaire)
//! with the [`ThreatCatalog`](crate::catalog::ThreatCatalog), scores every
//! answered threat, ranks the results and aggregates the overall score.

mod builder;
mod report;

pub use builder::AssessmentBuilder;
pub use report::{AssessmentReport, RiskDistribution, ThreatAssessment};
