use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::percent};

use crate::support::constraint::divide;

use super::Balance;

/// Fraction of the feed metal that reports to the concentrate.
///
/// Computed as `100·C·c / (F·f)` percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recovery(Ratio);

impl Recovery {
    /// Creates a recovery from a percentage.
    #[must_use]
    pub fn from_percent(value: f64) -> Self {
        Self(Ratio::new::<percent>(value))
    }

    /// Computes recovery for a closed balance.
    ///
    /// Returns `None` when the feed carries no metal (`F·f = 0`) or the
    /// quotient is not finite.
    #[must_use]
    pub fn from_balance(balance: &Balance) -> Option<Self> {
        divide(100.0 * balance.concentrate_metal(), balance.feed_metal())
            .ok()
            .map(Self::from_percent)
    }

    /// Returns the recovery in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.0.get::<percent>()
    }
}

impl Deref for Recovery {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
