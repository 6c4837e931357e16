//! Two-product formula for a concentrating separation.
//!
//! A feed stream `F` at grade `f` splits into a concentrate `C` at grade `c`
//! and tailings `T` at grade `t`. Solids and metal balances give
//!
//! ```text
//! F = C + T
//! F·f = C·c + T·t
//! ```
//!
//! so any two of the six quantities can be solved from the other four,
//! subject to the case table in [`TwoProductCase`].
//!
//! # Example
//!
//! ```
//! use mineral_balance::models::separation::two_product::{self, Field, TwoProductInput};
//!
//! let input = TwoProductInput::new()
//!     .with(Field::Feed, 100.0)
//!     .with(Field::FeedGrade, 20.0)
//!     .with(Field::ConcentrateGrade, 80.0)
//!     .with(Field::TailingsGrade, 5.0);
//!
//! let results = two_product::solve(&input).unwrap();
//! let record = results.record();
//!
//! assert_eq!(record.value("C"), Some(20.0));
//! assert_eq!(record.value("T"), Some(80.0));
//! assert_eq!(record.value("Recovery"), Some(80.0));
//! ```

mod core;

pub use self::core::{
    Balance, Field, Recovery, TwoProductCase, TwoProductConfig, TwoProductError, TwoProductInput,
    TwoProductResults,
};

use twine_core::Model;

/// Two-product separation model.
///
/// Wraps [`TwoProductConfig`] and implements [`Model`] so the balance can be
/// called like any other Twine model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoProduct {
    config: TwoProductConfig,
}

impl TwoProduct {
    /// Creates a model with the given configuration.
    #[must_use]
    pub fn new(config: TwoProductConfig) -> Self {
        Self { config }
    }

    /// Returns the model configuration.
    #[must_use]
    pub fn config(&self) -> &TwoProductConfig {
        &self.config
    }
}

impl Model for TwoProduct {
    type Input = TwoProductInput;
    type Output = TwoProductResults;
    type Error = TwoProductError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(input, &self.config)
    }
}

/// Solves a two-product balance with the default configuration.
///
/// # Errors
///
/// Returns a [`TwoProductError`] if the input does not have exactly two
/// unknowns, the unknown pair cannot be solved, or a formula divides by zero.
pub fn solve(input: &TwoProductInput) -> Result<TwoProductResults, TwoProductError> {
    self::core::solve(input, &TwoProductConfig::default())
}

/// Solves a two-product balance from `(symbol, value)` entries.
///
/// Symbols missing from `entries` are treated as unknown.
///
/// # Errors
///
/// Returns [`TwoProductError::UnknownField`] for an unrecognized symbol, and
/// otherwise behaves like [`solve`].
pub fn solve_entries<'a, I>(entries: I) -> Result<TwoProductResults, TwoProductError>
where
    I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
    let input = TwoProductInput::from_entries(entries)?;
    solve(&input)
}
