//! Cases, outcomes and their running tally

use crate::traits::OutcomeSink;
use crate::Interval;
use serde::Serialize;

/// Whether an observed value fell inside its reference interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// `L <= X <= R` (Y = 1)
    Inside,
    /// Anything else, including NaN observations (Y = 0)
    Outside,
}

impl Outcome {
    /// Bernoulli indicator value of the outcome
    pub fn indicator(self) -> u64 {
        match self {
            Outcome::Inside => 1,
            Outcome::Outside => 0,
        }
    }
}

/// One reference interval paired with one observed value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    /// Interval from the reference stream
    pub interval: Interval,
    /// Value from the submission stream
    pub observed: f64,
}

impl Case {
    /// Pair an interval with an observation
    pub fn new(interval: Interval, observed: f64) -> Self {
        Self { interval, observed }
    }

    /// Classify the case
    pub fn outcome(&self) -> Outcome {
        if self.interval.contains(self.observed) {
            Outcome::Inside
        } else {
            Outcome::Outside
        }
    }
}

/// Success and case counts accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Number of cases inside their interval (k)
    pub successes: u64,
    /// Number of cases observed (n)
    pub cases: u64,
}

impl Tally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from known counts
    ///
    /// `successes` is capped at `cases`.
    pub fn from_counts(successes: u64, cases: u64) -> Self {
        Self {
            successes: successes.min(cases),
            cases,
        }
    }

    /// Number of cases outside their interval
    pub fn failures(&self) -> u64 {
        self.cases - self.successes
    }

    /// Observed success proportion, `None` before any case was seen
    pub fn proportion(&self) -> Option<f64> {
        (self.cases > 0).then(|| self.successes as f64 / self.cases as f64)
    }
}

impl OutcomeSink for Tally {
    fn record(&mut self, outcome: Outcome) {
        self.cases += 1;
        self.successes += outcome.indicator();
    }
}

impl Extend<Outcome> for Tally {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}
