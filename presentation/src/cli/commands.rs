//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use subtype_domain::OutputFormat as DomainOutputFormat;

/// Output format for prediction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every model's prediction plus the consensus
    Full,
    /// Only the consensus answer
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for subtype-consensus
#[derive(Parser, Debug)]
#[command(name = "subtype-consensus")]
#[command(author, version, about = "Predict the detailed breast cancer subtype with several models and vote on the answer")]
#[command(long_about = r#"
subtype-consensus encodes a clinical record, runs every configured model on it
and resolves a consensus:

1. Each model predicts one subtype (with class probabilities when available)
2. The subtype with the most votes wins
3. Ties go to the higher mean confidence, then to the lowest class code

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./subtype.toml      Project-level config
3. ~/.config/subtype-consensus/config.toml   Global config

Example:
  subtype-consensus --example > patient.json
  subtype-consensus patient.json
  subtype-consensus -m "Random Forest" -o json patient.json
  cat patient.json | subtype-consensus -
"#)]
pub struct Cli {
    /// Clinical record as JSON (`-` reads stdin)
    pub input: Option<PathBuf>,

    /// Predict with a single model instead of the whole ensemble
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Skip the consensus step
    #[arg(long)]
    pub no_consensus: bool,

    /// Run the models concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Output format (defaults to the configured one, then `full`)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Describe the loaded models, features and classes, then exit
    #[arg(long)]
    pub model_info: bool,

    /// Print an example clinical record and exit
    #[arg(long)]
    pub example: bool,
}
