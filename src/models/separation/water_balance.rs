//! Water balance around a classifying cyclone.
//!
//! Cyclone feed solids `F` at dilution ratio `f` split into underflow `U` at
//! dilution `u` and overflow `V` at dilution `v`:
//!
//! ```text
//! F = U + V
//! F·f = U·u + V·v
//! ```
//!
//! With the moisture `m` of the fresh ball mill feed, the model also reports
//! how much water the cyclone feed sump needs on top of what the mill circuit
//! already carries.
//!
//! # Example
//!
//! ```
//! use mineral_balance::models::separation::water_balance::{self, Field, WaterBalanceInput};
//!
//! let input = WaterBalanceInput::new()
//!     .with(Field::Feed, 100.0)
//!     .with(Field::FeedDilution, 30.0)
//!     .with(Field::UnderflowDilution, 60.0)
//!     .with(Field::OverflowDilution, 10.0)
//!     .with(Field::Moisture, 20.0);
//!
//! let record = water_balance::solve(&input).unwrap().record();
//!
//! assert_eq!(record.value("U"), Some(40.0));
//! assert_eq!(record.value("V"), Some(60.0));
//! assert_eq!(record.value("WaterRequirementCycloneFeed"), Some(585.0));
//! ```

mod core;

pub use self::core::{
    Balance, Field, WaterBalanceCase, WaterBalanceConfig, WaterBalanceError, WaterBalanceInput,
    WaterBalanceResults, WaterFlows,
};

use twine_core::Model;

/// Cyclone water balance model.
///
/// Wraps [`WaterBalanceConfig`] and implements [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterBalance {
    config: WaterBalanceConfig,
}

impl WaterBalance {
    /// Creates a model with the given configuration.
    #[must_use]
    pub fn new(config: WaterBalanceConfig) -> Self {
        Self { config }
    }

    /// Returns the model configuration.
    #[must_use]
    pub fn config(&self) -> &WaterBalanceConfig {
        &self.config
    }
}

impl Model for WaterBalance {
    type Input = WaterBalanceInput;
    type Output = WaterBalanceResults;
    type Error = WaterBalanceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(input, &self.config)
    }
}

/// Solves a water balance with the default configuration.
///
/// # Errors
///
/// Returns a [`WaterBalanceError`] if the input does not have exactly two
/// unknowns, the unknown pair is not supported, or a formula divides by zero.
pub fn solve(input: &WaterBalanceInput) -> Result<WaterBalanceResults, WaterBalanceError> {
    self::core::solve(input, &WaterBalanceConfig::default())
}

/// Solves a water balance from `(symbol, value)` entries.
///
/// Symbols missing from `entries` are treated as unknown.
///
/// # Errors
///
/// Returns [`WaterBalanceError::UnknownField`] for an unrecognized symbol, and
/// otherwise behaves like [`solve`].
pub fn solve_entries<'a, I>(entries: I) -> Result<WaterBalanceResults, WaterBalanceError>
where
    I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
    let input = WaterBalanceInput::from_entries(entries)?;
    solve(&input)
}
