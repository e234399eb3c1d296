//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".riskgauge.yaml",
    ".riskgauge.yml",
    "riskgauge.yaml",
    "riskgauge.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/riskgauge/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("riskgauge")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Path `config init` writes to when none is given.
#[must_use]
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAMES[0])
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Apply command-line overrides on top of this config.
    ///
    /// Every value the user passed wins over the file, including values
    /// equal to the built-in defaults.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(policy) = overrides.input_policy {
            self.scoring.input_policy = policy;
        }

        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.report_title.is_some() {
            self.output.title.clone_from(&overrides.report_title);
        }
        if overrides.max_threats.is_some() {
            self.output.max_threats = overrides.max_threats;
        }
        if overrides.no_color {
            self.output.no_color = true;
        }

        if overrides.fail_on.is_some() {
            self.behavior.fail_on = overrides.fail_on;
        }
        if overrides.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and apply command-line overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# riskgauge configuration
# Place this file at .riskgauge.yaml in your project root or ~/.config/riskgauge/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# riskgauge configuration file
# =============================
#
# Place it at:
#   - .riskgauge.yaml in your project root
#   - ~/.config/riskgauge/riskgauge.yaml for global config
#
# CLI arguments always override file settings.

# Scoring
scoring:
  # Mitigation factor for responses that omit one (0.0-1.0)
  default_mitigation_factor: 0.5
  # Out-of-range inputs: permissive, clamp, strict
  input_policy: permissive

# Threat catalog
# catalog:
#   path: ./threats.yaml

# Output configuration
output:
  # Format: summary, json, csv, html
  format: summary
  # Output file path (omit for stdout)
  # file: report.html
  # Report heading
  # title: Cyber Risk Assessment Report
  # Maximum threats listed in summary and HTML reports
  # max_threats: 20
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 2 when the overall level is at or above: low, medium, high, critical
  # fail_on: high
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
