//! Positional diagnostics

use checkest_domain::IntervalError;
use serde::Serialize;
use std::fmt;

/// Which of the two compared streams a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Contestant output
    Submission,
    /// Jury output
    Reference,
}

impl Side {
    /// The other stream
    pub fn other(self) -> Self {
        match self {
            Side::Submission => Side::Reference,
            Side::Reference => Side::Submission,
        }
    }

    /// Stream name as used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Submission => "submission",
            Side::Reference => "reference",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of mismatch found between the streams
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffKind {
    /// One stream ran out of lines before the other
    StreamLength {
        /// Stream that ended first
        ended: Side,
    },

    /// Reference has a token the submission lacks
    MissingToken,

    /// Submission has a token the reference lacks
    ExcessToken,

    /// Reference interval with a lower bound but no upper bound
    UnpairedBound,

    /// Token expected to be a number is not one
    NotANumber {
        /// Stream holding the token
        side: Side,
        /// Token text
        text: String,
    },

    /// Reference bounds do not form a valid interval
    MalformedInterval {
        /// Lower bound text
        lower: String,
        /// Upper bound text
        upper: String,
        /// Why the interval was rejected
        reason: String,
    },

    /// Non-numeric tokens differ
    TextDiffers {
        /// Submission token
        submission: String,
        /// Reference token
        reference: String,
    },

    /// Numeric tokens differ beyond tolerance
    FloatDiffers {
        /// Submitted value
        submission: f64,
        /// Reference value
        reference: f64,
        /// Absolute difference, when exceeding the absolute budget
        absdiff: Option<f64>,
        /// Relative difference, when exceeding the relative budget
        reldiff: Option<f64>,
    },

    /// Whitespace runs differ
    Whitespace,
}

impl DiffKind {
    /// Whether the comparison stops after this record
    pub fn halts_comparison(&self) -> bool {
        matches!(self, DiffKind::StreamLength { .. } | DiffKind::NotANumber { .. })
    }

    /// Whether the rest of the current line is skipped after this record
    pub fn halts_line(&self) -> bool {
        self.halts_comparison()
            || matches!(
                self,
                DiffKind::MissingToken
                    | DiffKind::ExcessToken
                    | DiffKind::UnpairedBound
                    | DiffKind::MalformedInterval { .. }
            )
    }

    /// Malformed interval from an [`IntervalError`]
    pub fn malformed(lower: &str, upper: &str, error: IntervalError) -> Self {
        DiffKind::MalformedInterval {
            lower: lower.to_string(),
            upper: upper.to_string(),
            reason: error.to_string(),
        }
    }
}

/// One diagnostic, located by 1-based line and token number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRecord {
    /// Line number
    pub line: usize,
    /// Token number on the submission side (0 for leading whitespace),
    /// absent for whole-line records
    pub token: Option<usize>,
    /// What went wrong
    #[serde(flatten)]
    pub kind: DiffKind,
}

impl DiffRecord {
    /// Create a record
    pub fn new(line: usize, token: Option<usize>, kind: DiffKind) -> Self {
        Self { line, token, kind }
    }

    /// Description without the line prefix
    pub fn description(&self) -> String {
        let token = self.token.unwrap_or(0);
        match &self.kind {
            DiffKind::StreamLength { ended } => {
                format!("{} ended before {}.", ended, ended.other())
            }
            DiffKind::MissingToken => format!("submission misses token {}.", token),
            DiffKind::ExcessToken => format!("submission has excess token {}.", token),
            DiffKind::UnpairedBound => {
                format!("reference interval for token {} has no upper bound.", token)
            }
            DiffKind::NotANumber { side, text } => {
                format!("{} token {} cannot be parsed as float: '{}'.", side, token, text)
            }
            DiffKind::MalformedInterval {
                lower,
                upper,
                reason,
            } => format!(
                "reference interval [{}, {}] for token {} is malformed: {}.",
                lower, upper, token, reason
            ),
            DiffKind::TextDiffers {
                submission,
                reference,
            } => format!(
                "token {} non-float tokens differ: '{}' != '{}'.",
                token, submission, reference
            ),
            DiffKind::FloatDiffers {
                submission,
                reference,
                absdiff,
                reldiff,
            } => {
                let mut text = format!(
                    "token {} float differs: {} != {}",
                    token, submission, reference
                );
                if let Some(absdiff) = absdiff {
                    text.push_str(&format!("  absdiff = {:.5e}", absdiff));
                }
                if let Some(reldiff) = reldiff {
                    text.push_str(&format!("  reldiff = {:.5e}", reldiff));
                }
                text
            }
            DiffKind::Whitespace if token == 0 => "leading whitespace mismatch.".to_string(),
            DiffKind::Whitespace => format!("whitespace mismatch after token {}.", token),
        }
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.description())
    }
}
