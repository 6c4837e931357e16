//! Type-level numeric constraints checked once at construction.
//!
//! The balance formulas divide by differences of grades, dilution ratios and
//! stream rates. Wrapping each denominator in [`Constrained<f64, NonZero>`]
//! turns an algebraically undefined quotient into an error at the point of
//! division instead of an `inf` or `NaN` that leaks into the results.
//!
//! # Provided constraints
//!
//! - [`NonZero`]: Not equal to zero (and not `NaN`)
//! - [`Finite`]: Neither infinite nor `NaN`
//!
//! # Extending
//!
//! Custom invariants implement [`Constraint<T>`] on a zero-sized marker type.

mod finite;
mod non_zero;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::Finite;
pub use non_zero::NonZero;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use mineral_balance::support::constraint::{Constrained, NonZero};
///
/// let spread = Constrained::<f64, NonZero>::new(80.0 - 5.0).unwrap();
/// assert_eq!(spread.into_inner(), 75.0);
///
/// assert!(Constrained::<f64, NonZero>::new(5.0 - 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Divides `numerator` by a denominator that must not be zero.
///
/// The quotient must also be finite, so a denominator that is merely close
/// to zero is rejected once the result overflows.
///
/// # Errors
///
/// Returns [`ConstraintError::Zero`] if `denominator` is zero,
/// [`ConstraintError::NotANumber`] if either operand or the quotient is `NaN`,
/// and [`ConstraintError::Infinite`] if the quotient is infinite.
///
/// ```
/// use mineral_balance::support::constraint::{ConstraintError, divide};
///
/// assert_eq!(divide(1500.0, 75.0), Ok(20.0));
/// assert_eq!(divide(1500.0, 0.0), Err(ConstraintError::Zero));
/// assert_eq!(divide(1e300, 1e-10), Err(ConstraintError::Infinite));
/// ```
pub fn divide(numerator: f64, denominator: f64) -> ConstraintResult<f64> {
    let denominator = NonZero::new(denominator)?;
    let quotient = Finite::new(numerator / denominator.into_inner())?;
    Ok(quotient.into_inner())
}
