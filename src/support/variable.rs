//! Named variables of a balance variable set.

use std::fmt;

use thiserror::Error;

/// A fixed, named field in a balance variable set.
///
/// Symbols are the single-letter identifiers used on process flowsheets and
/// are case-sensitive: `F` is a solids flow while `f` is the matching grade
/// or dilution ratio.
pub trait Variable: Copy + Ord + fmt::Debug + 'static {
    /// Every field, in canonical order.
    const ALL: &'static [Self];

    /// Flowsheet symbol, also used as the key in result records.
    fn symbol(self) -> &'static str;

    /// Human-readable name.
    fn label(self) -> &'static str;

    /// Unit the value is expressed in, empty for dimensionless ratios.
    fn unit(self) -> &'static str;

    /// Looks up a field by its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFieldError`] if no field has this symbol.
    fn from_symbol(symbol: &str) -> Result<Self, UnknownFieldError> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.symbol() == symbol)
            .ok_or_else(|| UnknownFieldError {
                name: symbol.to_owned(),
            })
    }
}

/// A field name that is not part of the variable set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{name}`")]
pub struct UnknownFieldError {
    /// The unrecognized name.
    pub name: String,
}
