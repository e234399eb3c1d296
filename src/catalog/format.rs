//! Input format detection for catalog and questionnaire files.

use crate::error::{ErrorContext, Result, RiskError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Serialization format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Get the human-readable name for this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    /// Detect the format from the file extension, falling back to content.
    ///
    /// Content sniffing treats a leading `{` or `[` as JSON and any other
    /// non-empty document as YAML.
    #[must_use]
    pub fn detect(path: Option<&Path>, content: &str) -> Option<Self> {
        let by_extension = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .and_then(|ext| match ext.to_ascii_lowercase().as_str() {
                "yaml" | "yml" => Some(Self::Yaml),
                "json" => Some(Self::Json),
                _ => None,
            });
        if by_extension.is_some() {
            return by_extension;
        }

        match content.trim_start().chars().next() {
            Some('{' | '[') => Some(Self::Json),
            Some(_) => Some(Self::Yaml),
            None => None,
        }
    }
}

/// Deserialize `content` in the given format.
pub(crate) fn parse_str<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Read a file and deserialize it, detecting the format.
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| RiskError::io(path, e))?;
    let format = InputFormat::detect(Some(path), &content)
        .ok_or_else(|| RiskError::unknown_format(path.display().to_string()))?;

    tracing::debug!("Reading {} as {}", path.display(), format.name());

    parse_str(&content, format).with_context(|| format!("parsing {}", path.display()))
}
