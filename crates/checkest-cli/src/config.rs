//! Configuration management for the CLI.
//!
//! Settings are resolved once at startup from three layers: command-line
//! flags (and their environment variables), an optional TOML file, and
//! built-in defaults. The result is read-only for the rest of the run.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use checkest_differ::DiffConfig;
use checkest_domain::parameters::{DEFAULT_ALPHA, DEFAULT_PROBABILITY};
use checkest_domain::TestParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings file contents; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Significance level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    /// Null-hypothesis probability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,

    /// Absolute float precision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_prec: Option<f64>,

    /// Relative float precision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel_prec: Option<f64>,

    /// Fail on whitespace differences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_whitespace: Option<bool>,

    /// Report format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Colorize the verdict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Diagnostic lines and verdict line
    #[default]
    Text,
    /// Diagnostic lines and statistics table
    Table,
    /// JSON format
    Json,
    /// Verdict line only
    Quiet,
}

impl FileConfig {
    /// Load a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: FileConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Acceptance test parameters
    pub parameters: TestParameters,
    /// Token comparison settings
    pub diff: DiffConfig,
    /// Report format
    pub format: OutputFormat,
    /// Colorize the verdict
    pub color: bool,
}

impl Settings {
    /// Resolve settings from the command line and its optional config file.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, &file)
    }

    /// Layer command-line values over file values over defaults.
    pub fn merge(cli: &Cli, file: &FileConfig) -> Result<Self> {
        let defaults = DiffConfig::default();

        let alpha = cli.alpha.or(file.alpha).unwrap_or(DEFAULT_ALPHA);
        let probability = cli
            .probability
            .or(file.probability)
            .unwrap_or(DEFAULT_PROBABILITY);
        let parameters = TestParameters::new(alpha, probability)?;

        let diff = DiffConfig {
            abs_prec: cli.abs_prec.or(file.abs_prec).unwrap_or(defaults.abs_prec),
            rel_prec: cli.rel_prec.or(file.rel_prec).unwrap_or(defaults.rel_prec),
            strict_whitespace: cli.strict_whitespace
                || file.strict_whitespace.unwrap_or(defaults.strict_whitespace),
        };
        diff.validate()?;

        Ok(Self {
            parameters,
            diff,
            format: cli.format.map(Into::into).or(file.format).unwrap_or_default(),
            color: cli.color || file.color.unwrap_or(false),
        })
    }
}
