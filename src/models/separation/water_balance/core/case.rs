//! Case table for the cyclone solids split.

use log::trace;

use crate::support::{
    constraint::{Constrained, Finite, divide},
    unknowns::UnknownPair,
    variable::Variable,
};

use super::{Balance, Field, WaterBalanceError, WaterBalanceInput};

/// One row of the water balance case table, named by its unknown pair.
///
/// Only solids rates can be solved; dilution ratios and moisture must be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterBalanceCase {
    /// Unknown `{U, V}`: `U = F(f−v)/(u−v)`, `V = F − U`.
    UnderflowAndOverflow,

    /// Unknown `{F, U}`: `F = V(v−u)/(f−u)`, `U = F − V`.
    FeedAndUnderflow,

    /// Unknown `{F, V}`: `F = U(u−v)/(f−v)`, `V = F − U`.
    FeedAndOverflow,
}

impl WaterBalanceCase {
    /// Every case, in table order.
    pub const ALL: [Self; 3] = [
        Self::UnderflowAndOverflow,
        Self::FeedAndUnderflow,
        Self::FeedAndOverflow,
    ];

    /// Looks up the case for an unknown pair.
    #[must_use]
    pub fn from_pair(pair: UnknownPair<Field>) -> Option<Self> {
        match (pair.first(), pair.second()) {
            (Field::Underflow, Field::Overflow) => Some(Self::UnderflowAndOverflow),
            (Field::Feed, Field::Underflow) => Some(Self::FeedAndUnderflow),
            (Field::Feed, Field::Overflow) => Some(Self::FeedAndOverflow),
            _ => None,
        }
    }

    /// The two fields this case solves for, in canonical order.
    #[must_use]
    pub fn unknowns(self) -> [Field; 2] {
        match self {
            Self::UnderflowAndOverflow => [Field::Underflow, Field::Overflow],
            Self::FeedAndUnderflow => [Field::Feed, Field::Underflow],
            Self::FeedAndOverflow => [Field::Feed, Field::Overflow],
        }
    }

    /// The known solids rate this case starts from.
    #[must_use]
    pub fn basis(self) -> Field {
        match self {
            Self::UnderflowAndOverflow => Field::Feed,
            Self::FeedAndUnderflow => Field::Overflow,
            Self::FeedAndOverflow => Field::Underflow,
        }
    }

    /// Solves this case and returns the closed solids split.
    ///
    /// # Errors
    ///
    /// Returns [`WaterBalanceError::InsufficientData`] if the basis rate or a
    /// dilution ratio is unknown, [`WaterBalanceError::DivisionUndefined`] if
    /// two dilution ratios in a denominator are equal or the quotient
    /// overflows, and [`WaterBalanceError::NotFinite`] for a non-finite input
    /// or solved rate.
    pub fn apply(self, input: &WaterBalanceInput) -> Result<Balance, WaterBalanceError> {
        let basis = input.require(self.basis())?;
        let f = input.require(Field::FeedDilution)?;
        let u = input.require(Field::UnderflowDilution)?;
        let v = input.require(Field::OverflowDilution)?;

        let (feed, underflow, overflow) = match self {
            Self::UnderflowAndOverflow => {
                let (underflow, overflow) = underflow_and_overflow(basis, f, u, v)?;
                (basis, underflow, overflow)
            }
            Self::FeedAndUnderflow => {
                let (feed, underflow) = feed_and_underflow(basis, f, u, v)?;
                (feed, underflow, basis)
            }
            Self::FeedAndOverflow => {
                let (feed, overflow) = feed_and_overflow(basis, f, u, v)?;
                (feed, basis, overflow)
            }
        };

        let balance = Balance {
            feed,
            underflow,
            overflow,
            feed_dilution: f,
            underflow_dilution: u,
            overflow_dilution: v,
        };
        trace!("water balance: {self:?} closed as {balance:?}");
        Ok(balance)
    }
}

fn quotient(numerator: f64, denominator: f64, solving: Field) -> Result<f64, WaterBalanceError> {
    divide(numerator, denominator).map_err(|_| WaterBalanceError::DivisionUndefined {
        quantity: solving.symbol(),
    })
}

fn finite(value: f64, solving: Field) -> Result<f64, WaterBalanceError> {
    Finite::new(value)
        .map(Constrained::into_inner)
        .map_err(|_| WaterBalanceError::NotFinite {
            quantity: solving.symbol(),
        })
}

fn underflow_and_overflow(
    feed: f64,
    f: f64,
    u: f64,
    v: f64,
) -> Result<(f64, f64), WaterBalanceError> {
    let underflow = quotient(feed * (f - v), u - v, Field::Underflow)?;
    Ok((underflow, finite(feed - underflow, Field::Overflow)?))
}

fn feed_and_underflow(
    overflow: f64,
    f: f64,
    u: f64,
    v: f64,
) -> Result<(f64, f64), WaterBalanceError> {
    let feed = quotient(overflow * (v - u), f - u, Field::Feed)?;
    Ok((feed, finite(feed - overflow, Field::Underflow)?))
}

fn feed_and_overflow(
    underflow: f64,
    f: f64,
    u: f64,
    v: f64,
) -> Result<(f64, f64), WaterBalanceError> {
    let feed = quotient(underflow * (u - v), f - v, Field::Feed)?;
    Ok((feed, finite(feed - underflow, Field::Overflow)?))
}
