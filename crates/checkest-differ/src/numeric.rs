//! Number parsing and tolerance-based float equality

/// Parse a whole token as a floating-point number
///
/// Accepts an optional sign, decimal and scientific notation, and the
/// case-insensitive words `nan`, `inf` and `infinity`. Trailing garbage
/// (`1.5abc`) is a parse failure.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Absolute and relative precision for bare float comparisons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum accepted absolute difference
    pub absolute: f64,
    /// Maximum accepted difference relative to the reference value
    pub relative: f64,
}

impl Tolerance {
    /// Create a tolerance
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Compare a submitted value against a reference value
    ///
    /// Finite values are equal when within either the absolute or the
    /// relative budget. NaN equals NaN, infinities equal infinities of the
    /// same sign, and values of different classes never match.
    pub fn equal(&self, submitted: f64, reference: f64) -> bool {
        if submitted.is_finite() && reference.is_finite() {
            let (absdiff, reldiff) = differences(submitted, reference);
            return absdiff <= self.absolute || reldiff <= self.relative;
        }

        if submitted.is_nan() && reference.is_nan() {
            return true;
        }

        if submitted.is_infinite() && reference.is_infinite() {
            return submitted.is_sign_positive() == reference.is_sign_positive();
        }

        false
    }
}

/// Absolute and relative difference of two finite values
///
/// The relative difference is taken against `reference`; it is infinite when
/// the reference is zero and the values differ, and zero when both are zero.
pub fn differences(submitted: f64, reference: f64) -> (f64, f64) {
    let absdiff = (submitted - reference).abs();
    let reldiff = if absdiff == 0.0 {
        0.0
    } else {
        absdiff / reference.abs()
    };
    (absdiff, reldiff)
}
