//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// File could not be opened or read
    #[error("cannot open '{path}': {source}")]
    Io {
        /// Path as given on the command line
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Comparison aborted
    #[error(transparent)]
    Diff(#[from] checkest_differ::DiffError),

    /// Rejected test parameters
    #[error("{0}")]
    Parameters(#[from] checkest_domain::ParameterError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing the report failed
    #[error("cannot write report: {0}")]
    Output(#[source] std::io::Error),
}
