//! check_estimation CLI library.
//!
//! This library provides the command-line front end of the interval checker:
//! argument parsing, settings resolution, input handling and report formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::{FileConfig, OutputFormat, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
