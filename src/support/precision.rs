//! Rounding convention for reported balance values.
//!
//! Solvers compute with full `f64` precision and only round what they report.
//! Secondary metrics are derived from the unrounded primary values.

use std::fmt;

/// Decimal places used when reporting each kind of quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Solid flow rates (feed, concentrate, tailings, underflow, overflow).
    pub flow: u8,

    /// Solved assay grades.
    pub grade: u8,

    /// Recovery percentage.
    pub recovery: u8,

    /// Water flows.
    pub water: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            flow: 2,
            grade: 4,
            recovery: 2,
            water: 1,
        }
    }
}

impl Precision {
    /// Rounds a solid flow rate.
    #[must_use]
    pub fn flow(&self, value: f64) -> f64 {
        round(value, self.flow)
    }

    /// Rounds an assay grade.
    #[must_use]
    pub fn grade(&self, value: f64) -> f64 {
        round(value, self.grade)
    }

    /// Rounds a recovery percentage.
    #[must_use]
    pub fn recovery(&self, value: f64) -> f64 {
        round(value, self.recovery)
    }

    /// Rounds a water flow.
    #[must_use]
    pub fn water(&self, value: f64) -> f64 {
        round(value, self.water)
    }
}

/// Rounds `value` to `decimals` places.
///
/// Rounding happens on the exact decimal expansion of `value`, with ties going
/// to the even digit, and the result is the `f64` closest to the rounded
/// decimal. Non-finite values are returned unchanged.
///
/// ```
/// use mineral_balance::support::precision::round;
///
/// assert_eq!(round(20.004_999, 2), 20.0);
/// assert_eq!(round(0.125, 2), 0.12);
/// assert_eq!(round(2414.96, 1), 2415.0);
/// ```
#[must_use]
pub fn round(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = usize::from(decimals);
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Displays a reported value in report notation.
///
/// Values print in their shortest round-trip form with at least one decimal
/// (`20.0`, `0.3333`). Magnitudes from `1e16` up or below `1e-4` switch to
/// exponent form with a signed exponent of at least two digits.
///
/// ```
/// use mineral_balance::support::precision::Reported;
///
/// assert_eq!(Reported(80.0).to_string(), "80.0");
/// assert_eq!(Reported(4e16).to_string(), "4e+16");
/// assert_eq!(Reported(1e-5).to_string(), "1e-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reported(pub f64);

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:?}", self.0);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&text),
        }
    }
}
