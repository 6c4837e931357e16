//! Water flows around the grinding circuit.

use log::trace;

use crate::support::{
    constraint::{Constrained, Finite, divide},
    precision::Precision,
};

use super::{Balance, WaterBalanceError};

/// Water flows derived from a closed solids split, in m3/h.
///
/// Values are rounded to the water precision when computed. The requirement
/// is taken from the two rounded flows so the reported figures add up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterFlows {
    /// Water entering with the ball mill feed, `V·m/(100−m) + U·u`.
    pub ball_mill_feed: f64,

    /// Water in the cyclone feed, `(U+V)·f`.
    pub cyclone_feed: f64,

    /// Water to add at the cyclone feed, cyclone feed less ball mill feed.
    pub requirement: f64,
}

impl WaterFlows {
    /// Record key for the ball mill feed water.
    pub const BALL_MILL_FEED: &'static str = "WaterBallMillFeed";

    /// Record key for the cyclone feed water.
    pub const CYCLONE_FEED: &'static str = "WaterCycloneFeed";

    /// Record key for the cyclone feed water requirement.
    pub const REQUIREMENT: &'static str = "WaterRequirementCycloneFeed";

    /// Computes the water flows for `balance` at feed moisture `moisture` percent.
    ///
    /// # Errors
    ///
    /// Returns [`WaterBalanceError::DivisionUndefined`] if `moisture` is 100,
    /// and [`WaterBalanceError::NotFinite`] if a water flow overflows.
    pub fn compute(
        balance: &Balance,
        moisture: f64,
        precision: &Precision,
    ) -> Result<Self, WaterBalanceError> {
        let moisture_ratio = divide(moisture, 100.0 - moisture).map_err(|_| {
            WaterBalanceError::DivisionUndefined {
                quantity: Self::BALL_MILL_FEED,
            }
        })?;

        let ball_mill_feed = precision.water(finite(
            balance.overflow * moisture_ratio + balance.underflow * balance.underflow_dilution,
            Self::BALL_MILL_FEED,
        )?);
        let cyclone_feed = precision.water(finite(
            (balance.overflow + balance.underflow) * balance.feed_dilution,
            Self::CYCLONE_FEED,
        )?);
        let requirement = precision.water(finite(cyclone_feed - ball_mill_feed, Self::REQUIREMENT)?);

        trace!(
            "water balance: ball mill feed {ball_mill_feed}, cyclone feed {cyclone_feed}, requirement {requirement}"
        );

        Ok(Self {
            ball_mill_feed,
            cyclone_feed,
            requirement,
        })
    }

    /// Returns the flows as `(record key, value)` pairs.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            (Self::BALL_MILL_FEED, self.ball_mill_feed),
            (Self::CYCLONE_FEED, self.cyclone_feed),
            (Self::REQUIREMENT, self.requirement),
        ]
    }
}

fn finite(value: f64, key: &'static str) -> Result<f64, WaterBalanceError> {
    Finite::new(value)
        .map(Constrained::into_inner)
        .map_err(|_| WaterBalanceError::NotFinite { quantity: key })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance() -> Balance {
        Balance {
            feed: 100.0,
            underflow: 40.0,
            overflow: 60.0,
            feed_dilution: 30.0,
            underflow_dilution: 60.0,
            overflow_dilution: 10.0,
        }
    }

    #[test]
    fn flows() {
        let water = WaterFlows::compute(&balance(), 20.0, &Precision::default()).unwrap();

        assert_eq!(water.ball_mill_feed, 2415.0);
        assert_eq!(water.cyclone_feed, 3000.0);
        assert_eq!(water.requirement, 585.0);
    }

    #[test]
    fn requirement_uses_rounded_flows() {
        let balance = Balance {
            feed: 10.0,
            underflow: 3.0,
            overflow: 7.0,
            feed_dilution: 0.336,
            underflow_dilution: 0.38,
            overflow_dilution: 0.3,
        };

        let water = WaterFlows::compute(&balance, 0.0, &Precision::default()).unwrap();

        // Unrounded: 3.36 - 1.14 = 2.22.
        assert_eq!(water.ball_mill_feed, 1.1);
        assert_eq!(water.cyclone_feed, 3.4);
        assert_eq!(water.requirement, 2.3);
    }

    #[test]
    fn dry_feed_adds_no_moisture_water() {
        let water = WaterFlows::compute(&balance(), 0.0, &Precision::default()).unwrap();
        assert_eq!(water.ball_mill_feed, 2400.0);
        assert_eq!(water.requirement, 600.0);
    }

    #[test]
    fn saturated_feed_is_undefined() {
        assert_eq!(
            WaterFlows::compute(&balance(), 100.0, &Precision::default()),
            Err(WaterBalanceError::DivisionUndefined {
                quantity: WaterFlows::BALL_MILL_FEED
            })
        );
    }

    #[test]
    fn overflowing_water_is_not_finite() {
        let balance = Balance {
            underflow_dilution: f64::MAX,
            ..balance()
        };

        assert_eq!(
            WaterFlows::compute(&balance, 20.0, &Precision::default()),
            Err(WaterBalanceError::NotFinite {
                quantity: WaterFlows::BALL_MILL_FEED
            })
        );
    }

    #[test]
    fn entries_order() {
        let water = WaterFlows::compute(&balance(), 20.0, &Precision::default()).unwrap();
        let keys = water.entries().map(|(key, _)| key);
        assert_eq!(
            keys,
            [
                WaterFlows::BALL_MILL_FEED,
                WaterFlows::CYCLONE_FEED,
                WaterFlows::REQUIREMENT
            ]
        );
    }
}
