//! Detection of the unknown pair in a balance variable set.
//!
//! Every balance in this crate is a pair of linear equations, so a variable set
//! is solvable only when exactly two of its fields are unknown. [`UnknownPair`]
//! captures those two fields in canonical order so models can dispatch on them
//! with a plain `match`.

use std::fmt;

use thiserror::Error;

/// The number of unknown fields was not exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("exactly two unknowns required, found {found}")]
pub struct UnknownCountError {
    /// Number of unknown fields found.
    pub found: usize,
}

/// Exactly two unknown fields, stored in ascending field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownPair<F> {
    first: F,
    second: F,
}

impl<F: Copy + Ord> UnknownPair<F> {
    /// Creates a pair from two distinct fields, in any order.
    ///
    /// Returns `None` if both fields are the same.
    #[must_use]
    pub fn new(a: F, b: F) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Finds the unknown pair among `(field, value)` entries.
    ///
    /// A field is unknown when its value is `None`.
    /// Fields are expected to appear at most once.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCountError`] unless exactly two values are `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use mineral_balance::support::unknowns::UnknownPair;
    ///
    /// let pair = UnknownPair::find([('a', Some(1.0)), ('c', None), ('b', None)]).unwrap();
    /// assert_eq!(pair.fields(), ['b', 'c']);
    ///
    /// let err = UnknownPair::find([('a', None), ('b', Some(2.0))]).unwrap_err();
    /// assert_eq!(err.found, 1);
    /// ```
    pub fn find<I>(entries: I) -> Result<Self, UnknownCountError>
    where
        I: IntoIterator<Item = (F, Option<f64>)>,
    {
        let unknown: Vec<F> = entries
            .into_iter()
            .filter_map(|(field, value)| value.is_none().then_some(field))
            .collect();

        match *unknown.as_slice() {
            [a, b] => Self::new(a, b).ok_or(UnknownCountError { found: 1 }),
            _ => Err(UnknownCountError {
                found: unknown.len(),
            }),
        }
    }

    /// Returns the two fields in ascending order.
    #[must_use]
    pub fn fields(&self) -> [F; 2] {
        [self.first, self.second]
    }

    /// Returns the lower of the two fields.
    #[must_use]
    pub fn first(&self) -> F {
        self.first
    }

    /// Returns the higher of the two fields.
    #[must_use]
    pub fn second(&self) -> F {
        self.second
    }

    /// Returns `true` if `field` is one of the two unknowns.
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.first == field || self.second == field
    }
}

impl<F: fmt::Display> fmt::Display for UnknownPair<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.first, self.second)
    }
}
