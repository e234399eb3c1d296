//! Pipeline orchestration for assessments.
//!
//! Shared load → assess → report logic used by the CLI command handlers.

mod load_stage;
mod output;
mod report_stage;

pub use load_stage::{load_catalog, load_questionnaire, resolve_catalog_path};
pub use output::{color_for_target, should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    use crate::error::{AssessmentErrorKind, RiskError};
    use crate::scoring::RiskLevel;

    /// Success
    pub const SUCCESS: i32 = 0;
    /// Input failed validation
    pub const VALIDATION_FAILED: i32 = 1;
    /// Overall risk level reached the `--fail-on` threshold
    pub const RISK_THRESHOLD: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;

    /// Exit code for a finished assessment
    #[must_use]
    pub fn for_level(level: RiskLevel, fail_on: Option<RiskLevel>) -> i32 {
        match fail_on {
            Some(threshold) if level >= threshold => RISK_THRESHOLD,
            _ => SUCCESS,
        }
    }

    /// Exit code for a failed command
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> i32 {
        let is_validation = err.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<RiskError>(),
                Some(
                    RiskError::Validation(_)
                        | RiskError::Assessment {
                            source: AssessmentErrorKind::InputRejected { .. }
                                | AssessmentErrorKind::UnknownThreat(_)
                                | AssessmentErrorKind::DuplicateResponse(_),
                            ..
                        }
                )
            )
        });
        if is_validation {
            VALIDATION_FAILED
        } else {
            ERROR
        }
    }
}
