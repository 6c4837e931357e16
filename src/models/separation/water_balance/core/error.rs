use thiserror::Error;

use crate::support::{
    unknowns::{UnknownCountError, UnknownPair},
    variable::UnknownFieldError,
};

use super::Field;

/// Errors that can occur while solving a water balance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaterBalanceError {
    /// An entry named a field that is not part of the balance.
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    /// The input did not leave exactly two balanced fields unknown.
    #[error("exactly two unknowns required, found {found}")]
    InvalidUnknownCount {
        /// Number of unknown balanced fields.
        found: usize,
    },

    /// A field the selected formula depends on is unknown.
    #[error("insufficient data: {missing} is required")]
    InsufficientData {
        /// The missing field.
        missing: Field,
    },

    /// The unknown pair has no formula.
    ///
    /// Only pairs drawn from `F`, `U` and `V` can be solved.
    #[error("combination {pair} not supported")]
    UnsupportedCombination {
        /// The unknown pair.
        pair: UnknownPair<Field>,
    },

    /// A known value or a computed quantity is infinite or `NaN`.
    #[error("{quantity} is not a finite number")]
    NotFinite {
        /// Symbol or record key of the offending value.
        quantity: &'static str,
    },

    /// A denominator is zero or the quotient overflows.
    #[error("{quantity} is undefined: division by zero")]
    DivisionUndefined {
        /// Record key of the quantity being computed.
        quantity: &'static str,
    },
}

impl From<UnknownCountError> for WaterBalanceError {
    fn from(err: UnknownCountError) -> Self {
        Self::InvalidUnknownCount { found: err.found }
    }
}
