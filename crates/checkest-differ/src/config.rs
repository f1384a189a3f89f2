//! Differ configuration

use crate::numeric::Tolerance;
use crate::DiffError;

/// Default absolute precision for bare float comparisons
pub const DEFAULT_ABS_PREC: f64 = 1e-7;

/// Default relative precision for bare float comparisons
pub const DEFAULT_REL_PREC: f64 = 1e-7;

/// Configuration for token comparison
#[derive(Debug, Clone, PartialEq)]
pub struct DiffConfig {
    /// Absolute precision for floats compared outside intervals
    pub abs_prec: f64,

    /// Relative precision for floats compared outside intervals
    pub rel_prec: f64,

    /// Record whitespace differences as failing diagnostics
    pub strict_whitespace: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            abs_prec: DEFAULT_ABS_PREC,
            rel_prec: DEFAULT_REL_PREC,
            strict_whitespace: false,
        }
    }
}

impl DiffConfig {
    /// Check the precisions are usable
    pub fn validate(&self) -> Result<(), DiffError> {
        for (name, value) in [("abs_prec", self.abs_prec), ("rel_prec", self.rel_prec)] {
            if value.is_nan() || value < 0.0 {
                return Err(DiffError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Tolerance used for bare float tokens
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.abs_prec, self.rel_prec)
    }
}
