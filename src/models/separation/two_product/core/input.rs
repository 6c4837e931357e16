use std::{fmt, str::FromStr};

use crate::support::{
    constraint::{Constrained, Finite},
    variable::{UnknownFieldError, Variable},
};

use super::TwoProductError;

/// A field of the two-product balance.
///
/// Fields are ordered flows first, then grades; unknown pairs are reported in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Feed solids rate `F`.
    Feed,
    /// Concentrate solids rate `C`.
    Concentrate,
    /// Tailings solids rate `T`.
    Tailings,
    /// Feed grade `f`.
    FeedGrade,
    /// Concentrate grade `c`.
    ConcentrateGrade,
    /// Tailings grade `t`.
    TailingsGrade,
}

impl Variable for Field {
    const ALL: &'static [Self] = &[
        Self::Feed,
        Self::Concentrate,
        Self::Tailings,
        Self::FeedGrade,
        Self::ConcentrateGrade,
        Self::TailingsGrade,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Feed => "F",
            Self::Concentrate => "C",
            Self::Tailings => "T",
            Self::FeedGrade => "f",
            Self::ConcentrateGrade => "c",
            Self::TailingsGrade => "t",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Concentrate => "Concentrate",
            Self::Tailings => "Tailings",
            Self::FeedGrade => "Feed Grade",
            Self::ConcentrateGrade => "Concentrate Grade",
            Self::TailingsGrade => "Tailings Grade",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Self::Feed | Self::Concentrate | Self::Tailings => "t/h",
            Self::FeedGrade | Self::ConcentrateGrade | Self::TailingsGrade => "%",
        }
    }
}

impl Field {
    /// Returns `true` for the grade fields.
    #[must_use]
    pub fn is_grade(self) -> bool {
        matches!(
            self,
            Self::FeedGrade | Self::ConcentrateGrade | Self::TailingsGrade
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// Known and unknown values of a two-product balance.
///
/// `None` marks an unknown. A solvable input has exactly two unknowns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TwoProductInput {
    /// Feed solids rate `F`, in t/h.
    pub feed: Option<f64>,

    /// Concentrate solids rate `C`, in t/h.
    pub concentrate: Option<f64>,

    /// Tailings solids rate `T`, in t/h.
    pub tailings: Option<f64>,

    /// Feed grade `f`, in percent.
    pub feed_grade: Option<f64>,

    /// Concentrate grade `c`, in percent.
    pub concentrate_grade: Option<f64>,

    /// Tailings grade `t`, in percent.
    pub tailings_grade: Option<f64>,
}

impl TwoProductInput {
    /// Creates an input with every field unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the input with `field` set to a known value.
    #[must_use]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Builds an input from `(symbol, value)` entries.
    ///
    /// Fields not named in `entries` stay unknown. A later entry for the same
    /// symbol overrides an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`TwoProductError::UnknownField`] if a symbol is not one of
    /// `F`, `C`, `T`, `f`, `c` or `t`.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, TwoProductError>
    where
        I: IntoIterator<Item = (&'a str, Option<f64>)>,
    {
        let mut input = Self::new();
        for (symbol, value) in entries {
            input.set(symbol.parse()?, value);
        }
        Ok(input)
    }

    /// Returns the value of `field`, or `None` if it is unknown.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Feed => self.feed,
            Field::Concentrate => self.concentrate,
            Field::Tailings => self.tailings,
            Field::FeedGrade => self.feed_grade,
            Field::ConcentrateGrade => self.concentrate_grade,
            Field::TailingsGrade => self.tailings_grade,
        }
    }

    /// Sets or clears the value of `field`.
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Feed => &mut self.feed,
            Field::Concentrate => &mut self.concentrate,
            Field::Tailings => &mut self.tailings,
            Field::FeedGrade => &mut self.feed_grade,
            Field::ConcentrateGrade => &mut self.concentrate_grade,
            Field::TailingsGrade => &mut self.tailings_grade,
        };
        *slot = value;
    }

    /// Returns every field with its value, in canonical order.
    #[must_use]
    pub fn entries(&self) -> [(Field, Option<f64>); 6] {
        [
            (Field::Feed, self.feed),
            (Field::Concentrate, self.concentrate),
            (Field::Tailings, self.tailings),
            (Field::FeedGrade, self.feed_grade),
            (Field::ConcentrateGrade, self.concentrate_grade),
            (Field::TailingsGrade, self.tailings_grade),
        ]
    }

    /// Returns the value of a field a formula depends on.
    ///
    /// The value must be known and finite.
    pub(super) fn require(&self, field: Field) -> Result<f64, TwoProductError> {
        let value = self
            .get(field)
            .ok_or(TwoProductError::InsufficientData { missing: field })?;
        Finite::new(value)
            .map(Constrained::into_inner)
            .map_err(|_| TwoProductError::NotFinite {
                quantity: field.symbol(),
            })
    }
}
