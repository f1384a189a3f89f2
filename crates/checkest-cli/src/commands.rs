//! Check command implementation.

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use checkest_differ::{check, Report};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::debug;

/// File argument naming standard input.
pub const STDIN: &str = "-";

/// Open an input file, or standard input for [`STDIN`].
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == STDIN {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Execute the check and write the rendered report to `out`.
pub fn execute_check<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<Report> {
    if cli.submission == STDIN && cli.reference == STDIN {
        return Err(CliError::InvalidInput(
            "SUBMISSION and REFERENCE cannot both be read from standard input".to_string(),
        ));
    }
    debug!(ignored = %cli.ignored, "Ignoring first argument");

    let submission = open_input(&cli.submission)?;
    let reference = open_input(&cli.reference)?;

    let report = check(submission, reference, &settings.diff, &settings.parameters)?;

    let formatter = Formatter::new(settings.format, settings.color);
    writeln!(out, "{}", formatter.render(&report)?).map_err(CliError::Output)?;

    Ok(report)
}
