//! Unified error types for riskgauge.
//!
//! The scoring engine itself never fails; these errors cover everything
//! around it: loading catalogs and questionnaires, building assessments,
//! and producing reports.

use crate::scoring::InputViolation;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for riskgauge operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RiskError {
    /// Errors while loading a catalog or questionnaire
    #[error("Failed to load input: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors while building an assessment
    #[error("Assessment failed: {context}")]
    Assessment {
        context: String,
        #[source]
        source: AssessmentErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: crate::reports::ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Unknown input format - expected YAML or JSON")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Duplicate threat id: {0}")]
    DuplicateThreat(String),
}

/// Specific assessment error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssessmentErrorKind {
    #[error("Threat '{0}' is not in the catalog")]
    UnknownThreat(String),

    #[error("Threat '{0}' was answered more than once")]
    DuplicateResponse(String),

    #[error("Response for '{threat_id}' rejected: {violation}")]
    InputRejected {
        threat_id: String,
        violation: InputViolation,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for riskgauge operations
pub type Result<T> = std::result::Result<T, RiskError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl RiskError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for an unknown input format
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::load(format!("at {}", path.into()), LoadErrorKind::UnknownFormat)
    }

    /// Create a load error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::load(
            "missing required field",
            LoadErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an assessment error with context
    pub fn assessment(context: impl Into<String>, source: AssessmentErrorKind) -> Self {
        Self::Assessment {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: crate::reports::ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for RiskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for RiskError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for RiskError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::load(
            "YAML deserialization",
            LoadErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<InputViolation> for RiskError {
    fn from(err: InputViolation) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::reports::ReportError> for RiskError {
    fn from(err: crate::reports::ReportError) -> Self {
        Self::report("", err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, so a failure deep inside a
/// loader reads as `"loading catalog: parsing threats: ..."`.
///
/// # Example
///
/// ```ignore
/// use riskgauge::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<ThreatCatalog> {
///     let content = std::fs::read_to_string(path)
///         .context("reading catalog file")?;
///
///     ThreatCatalog::from_str(&content)
///         .with_context(|| format!("parsing catalog from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<RiskError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: RiskError, new_ctx: &str) -> RiskError {
    match err {
        RiskError::Load {
            context: existing,
            source,
        } => RiskError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RiskError::Assessment {
            context: existing,
            source,
        } => RiskError::Assessment {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RiskError::Report {
            context: existing,
            source,
        } => RiskError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RiskError::Io {
            path,
            message,
            source,
        } => RiskError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        RiskError::Config(msg) => RiskError::Config(chain_context(new_ctx, &msg)),
        RiskError::Validation(msg) => RiskError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings: `"new: existing"`, or just `new` when
/// nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
