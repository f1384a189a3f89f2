//! check_estimation Stream Differ
//!
//! Walks a submission stream and a reference stream line by line and token
//! by token.
//!
//! The differ provides:
//! - Whitespace-insensitive tokenization with whitespace tracking
//! - Literal and tolerance-based numeric token comparison
//! - Interval cases (`L R` in the reference against `X` in the submission)
//!   fed to an [`checkest_domain::OutcomeSink`]
//! - Positional diagnostics ([`DiffRecord`]) for every structural mismatch
//!
//! # Examples
//!
//! ```
//! use checkest_differ::{check, DiffConfig};
//! use checkest_domain::TestParameters;
//!
//! let reference = "0.90 1.10\n0.95 1.05\n";
//! let submission = "1.00\n1.00\n";
//!
//! let report = check(
//!     submission.as_bytes(),
//!     reference.as_bytes(),
//!     &DiffConfig::default(),
//!     &TestParameters::default(),
//! )
//! .unwrap();
//!
//! assert!(report.is_accepted());
//! assert_eq!(report.verdict.tally.cases, 2);
//! ```

#![warn(missing_docs)]

mod config;
mod differ;
mod error;
pub mod numeric;
mod record;
mod report;
pub mod tokens;

pub use config::DiffConfig;
pub use differ::{DiffSummary, Differ};
pub use error::DiffError;
pub use record::{DiffKind, DiffRecord, Side};
pub use report::{check, Judgment, Report};
