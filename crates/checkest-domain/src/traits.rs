//! Trait definitions for the differ/acceptance boundary
//!
//! The stream differ produces outcomes without knowing how they are
//! aggregated; the acceptance test only ever sees the aggregate.

use crate::Outcome;

/// Receiver of per-case outcomes
///
/// Implemented by [`crate::Tally`]; tests may implement it to capture the
/// exact outcome sequence.
pub trait OutcomeSink {
    /// Record the outcome of one case
    fn record(&mut self, outcome: Outcome);
}

impl OutcomeSink for Vec<Outcome> {
    fn record(&mut self, outcome: Outcome) {
        self.push(outcome);
    }
}

impl<S: OutcomeSink + ?Sized> OutcomeSink for &mut S {
    fn record(&mut self, outcome: Outcome) {
        (**self).record(outcome);
    }
}
