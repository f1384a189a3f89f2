//! Parameters of the acceptance test

use serde::Serialize;
use thiserror::Error;

/// Default significance level
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default null-hypothesis success probability
pub const DEFAULT_PROBABILITY: f64 = 0.95;

/// Rejected parameter values
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// Significance level outside the open interval (0, 1)
    #[error("significance level alpha must be in (0, 1), got {0}")]
    Alpha(f64),

    /// Probability outside the closed interval [0, 1]
    #[error("probability must be in [0, 1], got {0}")]
    Probability(f64),
}

/// Significance level and null-hypothesis proportion for one run
///
/// Fields are private so every instance has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestParameters {
    alpha: f64,
    probability: f64,
}

impl TestParameters {
    /// Create validated parameters
    pub fn new(alpha: f64, probability: f64) -> Result<Self, ParameterError> {
        if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(ParameterError::Alpha(alpha));
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(ParameterError::Probability(probability));
        }

        Ok(Self { alpha, probability })
    }

    /// Significance level of the one-sided test
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Success probability `p0` under the null hypothesis
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for TestParameters {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            probability: DEFAULT_PROBABILITY,
        }
    }
}
