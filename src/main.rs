//! riskgauge: cyber-risk scoring for threat questionnaires
//!
//! Scores threats from exposure answers and catalog severities, and
//! aggregates them into an overall risk rating.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use riskgauge::{
    cli,
    config::{self, AppConfig, ConfigOverrides, ConfigPreset, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
    scoring::{InputPolicy, RiskLevel},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with supported formats
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  threat catalogs and questionnaires as YAML or JSON",
        "\n\nOutput Formats:",
        "\n  summary, json, csv, html",
        "\n\nRisk Levels:",
        "\n  critical >= 80, high >= 60, medium >= 40, low < 40"
    )
}

#[derive(Parser)]
#[command(name = "riskgauge")]
#[command(version, long_version = build_long_version())]
#[command(about = "Cyber-risk scoring for threat questionnaires", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Input failed validation
    2  Overall risk level reached --fail-on
    3  Error occurred

EXAMPLES:
    # Score one threat: exposure answer 4, severity 85, 30% mitigated
    riskgauge score 4 85 --mitigation 0.3

    # Overall score for a set of risk scores
    riskgauge aggregate 95 72 40 10

    # Full assessment as an HTML report
    riskgauge assess answers.yaml --catalog threats.yaml -o html -O report.html

    # CI/CD gate
    riskgauge assess answers.yaml --catalog threats.yaml --fail-on high")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RISKGAUGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Questionnaire answer on the 0-5 exposure scale
    #[arg(allow_negative_numbers = true)]
    exposure: i32,

    /// Inherent threat severity, 0-100
    #[arg(allow_negative_numbers = true)]
    severity: f64,

    /// Effectiveness of existing controls, 0-1; full mitigation halves likelihood
    #[arg(short, long, allow_negative_numbers = true)]
    mitigation: Option<f64>,

    /// Input policy for out-of-range values
    #[arg(long, value_enum)]
    policy: Option<InputPolicy>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the `aggregate` subcommand
#[derive(Parser)]
struct AggregateArgs {
    /// Per-threat risk scores
    #[arg(allow_negative_numbers = true)]
    scores: Vec<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Path to the questionnaire (YAML or JSON)
    questionnaire: PathBuf,

    /// Path to the threat catalog (overrides `catalog.path`)
    #[arg(long, env = "RISKGAUGE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Input policy for out-of-range answers
    #[arg(long, value_enum)]
    policy: Option<InputPolicy>,

    /// Report heading
    #[arg(long)]
    title: Option<String>,

    /// List at most this many threats in summary and HTML reports
    #[arg(long)]
    max_threats: Option<usize>,

    /// Exit with code 2 when the overall level is at or above this level
    #[arg(long, value_enum)]
    fail_on: Option<RiskLevel>,
}

/// Arguments for the `catalog` subcommand
#[derive(Parser)]
struct CatalogArgs {
    /// Path to the threat catalog (overrides `catalog.path`)
    #[arg(long, env = "RISKGAUGE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single threat
    Score(ScoreArgs),

    /// Combine per-threat risk scores into an overall score
    Aggregate(AggregateArgs),

    /// Assess a questionnaire against a threat catalog
    Assess(AssessArgs),

    /// List the threats of a catalog, most severe first
    Catalog(CatalogArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .riskgauge.yaml in the current directory
    Init {
        /// Start from a named preset (default, strict, ci-cd)
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::for_error(&err));
        }
    }
}

/// Dispatch to command handlers.
fn run(cli: Cli) -> Result<i32> {
    let overrides = ConfigOverrides {
        no_color: cli.no_color,
        quiet: cli.quiet,
        ..ConfigOverrides::default()
    };

    match cli.command {
        Commands::Score(args) => {
            let overrides = ConfigOverrides {
                input_policy: args.policy,
                ..overrides
            };
            let config = effective_config(cli.config.as_deref(), &overrides)?;
            cli::run_score(
                &config.scoring,
                args.exposure,
                args.severity,
                args.mitigation,
                args.json,
            )
        }

        Commands::Aggregate(args) => cli::run_aggregate(&args.scores, args.json),

        Commands::Assess(args) => {
            let overrides = ConfigOverrides {
                input_policy: args.policy,
                output_format: args.output,
                output_file: args.output_file,
                report_title: args.title,
                max_threats: args.max_threats,
                fail_on: args.fail_on,
                ..overrides
            };
            let config = effective_config(cli.config.as_deref(), &overrides)?;
            cli::run_assess(&config, &args.questionnaire, args.catalog)
        }

        Commands::Catalog(args) => {
            let overrides = ConfigOverrides {
                output_file: args.output_file,
                ..overrides
            };
            let config = effective_config(cli.config.as_deref(), &overrides)?;
            cli::run_catalog(&config, args.catalog, args.output)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "riskgauge", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("riskgauge").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init { preset } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(config::default_config_path());
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = match preset {
                    Some(name) => {
                        let preset = ConfigPreset::from_name(&name).with_context(|| {
                            format!("unknown preset '{name}' (expected default, strict or ci-cd)")
                        })?;
                        let yaml = serde_yaml::to_string(&AppConfig::from_preset(preset))
                            .context("failed to serialize config")?;
                        format!("# riskgauge configuration: {}\n\n{yaml}", preset.description())
                    }
                    None => config::generate_full_example_config(),
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Layer CLI values over the discovered config file and validate the result.
fn effective_config(
    config_path: Option<&std::path::Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        tracing::warn!("Invalid configuration: {error}");
    }
    Err(riskgauge::RiskError::config(format!(
        "{} invalid configuration value(s)",
        errors.len()
    ))
    .into())
}
