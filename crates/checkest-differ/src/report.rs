//! Combined structural and statistical judgment

use crate::{DiffConfig, DiffError, DiffSummary, Differ};
use checkest_domain::{evaluate, Tally, TestParameters, Verdict};
use serde::Serialize;
use std::io::BufRead;
use tracing::info;

/// Overall result of checking a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    /// No structural difference and the acceptance test passed
    Accepted,
    /// Streams line up but too few values fell inside their intervals
    RejectedStatistically,
    /// Streams differ structurally; the statistical verdict is moot
    RejectedStructurally,
}

impl Judgment {
    /// Whether the submission is accepted
    pub fn is_accepted(self) -> bool {
        self == Judgment::Accepted
    }
}

/// Everything learned from one comparison run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Structural diagnostics
    pub diff: DiffSummary,
    /// Statistical verdict over the cases formed before any fatal difference
    pub verdict: Verdict,
}

impl Report {
    /// Combine diff and verdict into one judgment
    ///
    /// Any failing diagnostic rejects, regardless of the verdict.
    pub fn judgment(&self) -> Judgment {
        if !self.diff.is_clean() {
            Judgment::RejectedStructurally
        } else if !self.verdict.decision.is_accept() {
            Judgment::RejectedStatistically
        } else {
            Judgment::Accepted
        }
    }

    /// Whether the submission is accepted
    pub fn is_accepted(&self) -> bool {
        self.judgment().is_accepted()
    }
}

/// Compare both streams and run the acceptance test on the resulting cases
///
/// # Errors
///
/// Fails on an invalid `config` or when reading a stream fails.
pub fn check<S, R>(
    submission: S,
    reference: R,
    config: &DiffConfig,
    parameters: &TestParameters,
) -> Result<Report, DiffError>
where
    S: BufRead,
    R: BufRead,
{
    config.validate()?;

    let mut tally = Tally::new();
    let diff = Differ::new(config.clone()).compare(submission, reference, &mut tally)?;
    let verdict = evaluate(tally, parameters);

    let report = Report { diff, verdict };
    info!(
        successes = tally.successes,
        cases = tally.cases,
        judgment = ?report.judgment(),
        "Check complete"
    );

    Ok(report)
}
