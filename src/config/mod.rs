//! Configuration module for riskgauge.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets
//! - YAML config file loading and discovery
//! - Command-line overrides
//!
//! # Quick Start
//!
//! ```rust
//! use riskgauge::config::{AppConfig, ConfigPreset};
//! use riskgauge::scoring::{InputPolicy, RiskLevel};
//!
//! let config = AppConfig::builder()
//!     .input_policy(InputPolicy::Strict)
//!     .fail_on(Some(RiskLevel::High))
//!     .build();
//! assert_eq!(config.scoring.input_policy, InputPolicy::Strict);
//!
//! let ci = AppConfig::from_preset(ConfigPreset::CiCd);
//! assert_eq!(ci.behavior.fail_on, Some(RiskLevel::High));
//! ```
//!
//! # Configuration File
//!
//! Place a `.riskgauge.yaml` file in your project root or `~/.config/riskgauge/`:
//!
//! ```yaml
//! scoring:
//!   input_policy: strict
//! catalog:
//!   path: ./threats.yaml
//! behavior:
//!   fail_on: high
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CatalogConfig, ConfigOverrides, OutputConfig,
    ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.riskgauge.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
