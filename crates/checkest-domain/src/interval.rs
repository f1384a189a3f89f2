//! Reference interval module

use serde::Serialize;
use thiserror::Error;

/// Reasons an interval read from the reference output is unusable
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    /// One of the bounds is NaN, which has no ordering
    #[error("interval bound is NaN")]
    NanBound,

    /// Lower bound is above upper bound
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    Reversed {
        /// Lower bound as read
        lower: f64,
        /// Upper bound as read
        upper: f64,
    },
}

/// Closed interval `[lower, upper]` of accepted values
///
/// Bounds may be infinite, so `[-inf, inf]` accepts every non-NaN value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    /// Lower bound (inclusive)
    pub lower: f64,
    /// Upper bound (inclusive)
    pub upper: f64,
}

impl Interval {
    /// Create a new interval
    ///
    /// # Errors
    /// Returns an error if a bound is NaN or `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(IntervalError::NanBound);
        }
        if lower > upper {
            return Err(IntervalError::Reversed { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    /// Check if the interval contains a value
    ///
    /// NaN is unordered and never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
