//! Command-line argument definitions.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Compare program output in SUBMISSION with reference output in REFERENCE
/// for nondeterministic intervals.
///
/// Each numeric value in SUBMISSION is checked against the interval `L R` at
/// the same position in REFERENCE. The submission is rejected when the share
/// of values inside their intervals is significantly below PROBABILITY at
/// significance level ALPHA, or when the files differ structurally.
#[derive(Debug, Parser)]
#[command(name = "check_estimation")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Ignored, but needed for compatibility
    #[arg(value_name = "IGNORED")]
    pub ignored: String,

    /// Program output; `-` reads standard input
    #[arg(value_name = "SUBMISSION")]
    pub submission: String,

    /// Reference output with intervals; `-` reads standard input
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Significance level of the test (default: 0.05)
    #[arg(short, long, value_name = "VAL", env = "CHECK_ESTIMATION_ALPHA")]
    pub alpha: Option<f64>,

    /// Required probability of a value falling inside its interval (default: 0.95)
    #[arg(short, long, value_name = "VAL", env = "CHECK_ESTIMATION_PROBABILITY")]
    pub probability: Option<f64>,

    /// Absolute precision for numbers compared outside intervals (default: 1e-7)
    #[arg(long, value_name = "VAL")]
    pub abs_prec: Option<f64>,

    /// Relative precision for numbers compared outside intervals (default: 1e-7)
    #[arg(long, value_name = "VAL")]
    pub rel_prec: Option<f64>,

    /// Treat whitespace differences as failures
    #[arg(long)]
    pub strict_whitespace: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Colorize the verdict
    #[arg(long)]
    pub color: bool,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE", env = "CHECK_ESTIMATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Diagnostic lines and a verdict line (default)
    Text,
    /// Diagnostic lines and a statistics table
    Table,
    /// JSON document
    Json,
    /// Verdict line only
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
