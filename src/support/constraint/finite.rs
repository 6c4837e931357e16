use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type for values that must be finite.
///
/// Known inputs and computed flows pass through this marker so that an
/// overflowing product or a `NaN` entry is reported instead of reaching the
/// results.
///
/// # Examples
///
/// ```
/// use mineral_balance::support::constraint::{ConstraintError, Finite};
///
/// let x = Finite::new(-0.25).unwrap();
/// assert_eq!(x.into_inner(), -0.25);
///
/// assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
/// assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not a number (`NaN`).
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
