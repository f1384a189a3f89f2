//! check_estimation Domain Layer
//!
//! This crate contains the statistical model behind the estimation checker.
//! It performs no I/O and defines the value objects, the acceptance test and
//! the trait seam through which the stream differ reports its outcomes.
//!
//! ## Key Concepts
//!
//! - **Interval**: closed `[L, R]` range taken from the reference output
//! - **Case**: one interval paired with one observed value from the submission
//! - **Outcome**: whether the observed value fell inside its interval
//! - **Tally**: running success / case counts fed by the differ
//! - **Verdict**: one-sided test of `H0: p = p0` against `H1: p < p0`
//!
//! ## Architecture
//!
//! - No I/O, no logging
//! - Pure computation only
//! - Stream handling lives in `checkest-differ`, glue in `checkest-cli`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod acceptance;
pub mod case;
pub mod interval;
pub mod parameters;
pub mod traits;

// Re-exports for convenience
pub use acceptance::{evaluate, normal_quantile, Decision, Verdict};
pub use case::{Case, Outcome, Tally};
pub use interval::{Interval, IntervalError};
pub use parameters::{ParameterError, TestParameters};
pub use traits::OutcomeSink;
