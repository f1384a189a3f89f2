//! Differ error types

use crate::Side;
use thiserror::Error;

/// Errors that abort a comparison
///
/// Mismatches between the streams are not errors; they are reported as
/// [`crate::DiffRecord`]s.
#[derive(Error, Debug)]
pub enum DiffError {
    /// Reading one of the streams failed
    #[error("failed to read {side}: {source}")]
    Read {
        /// Stream that failed
        side: Side,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid tolerance configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
