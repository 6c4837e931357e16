use thiserror::Error;

use crate::support::{
    unknowns::{UnknownCountError, UnknownPair},
    variable::UnknownFieldError,
};

use super::Field;

/// Errors that can occur while solving a two-product balance.
///
/// The display message of each variant is suitable for showing to the person
/// who filled in the balance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TwoProductError {
    /// An entry named a field that is not part of the balance.
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    /// The input did not leave exactly two fields unknown.
    #[error("exactly two unknowns required, found {found}")]
    InvalidUnknownCount {
        /// Number of unknown fields.
        found: usize,
    },

    /// A field the selected formula depends on is unknown.
    #[error("insufficient data: {missing} is required")]
    InsufficientData {
        /// The missing field.
        missing: Field,
    },

    /// Feed and tailings grades cannot both be solved from one balance.
    #[error("cannot uniquely solve for f and t: underdetermined system")]
    Underdetermined,

    /// The unknown pair has no formula.
    #[error("combination {pair} not supported")]
    UnsupportedCombination {
        /// The unknown pair.
        pair: UnknownPair<Field>,
    },

    /// A known value or a computed quantity is infinite or `NaN`.
    #[error("{quantity} is not a finite number")]
    NotFinite {
        /// Symbol of the offending field or solved quantity.
        quantity: &'static str,
    },

    /// A formula's denominator is zero or the quotient overflows.
    #[error("{quantity} is undefined: division by zero")]
    DivisionUndefined {
        /// Symbol of the quantity being solved.
        quantity: &'static str,
    },
}

impl From<UnknownCountError> for TwoProductError {
    fn from(err: UnknownCountError) -> Self {
        Self::InvalidUnknownCount { found: err.found }
    }
}
