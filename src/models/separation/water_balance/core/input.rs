use std::{fmt, str::FromStr};

use crate::support::{
    constraint::{Constrained, Finite},
    variable::{UnknownFieldError, Variable},
};

use super::WaterBalanceError;

/// A field of the cyclone water balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Cyclone feed solids `F`.
    Feed,
    /// Underflow solids `U`.
    Underflow,
    /// Overflow solids `V`.
    Overflow,
    /// Feed dilution ratio `f`.
    FeedDilution,
    /// Underflow dilution ratio `u`.
    UnderflowDilution,
    /// Overflow dilution ratio `v`.
    OverflowDilution,
    /// Moisture of the fresh ball mill feed `m`.
    ///
    /// Only used for the water flows and never solved for.
    Moisture,
}

impl Variable for Field {
    const ALL: &'static [Self] = &[
        Self::Feed,
        Self::Underflow,
        Self::Overflow,
        Self::FeedDilution,
        Self::UnderflowDilution,
        Self::OverflowDilution,
        Self::Moisture,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Feed => "F",
            Self::Underflow => "U",
            Self::Overflow => "V",
            Self::FeedDilution => "f",
            Self::UnderflowDilution => "u",
            Self::OverflowDilution => "v",
            Self::Moisture => "m",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Underflow => "Underflow",
            Self::Overflow => "Overflow",
            Self::FeedDilution => "Feed Dilution Ratio",
            Self::UnderflowDilution => "Underflow Dilution Ratio",
            Self::OverflowDilution => "Overflow Dilution Ratio",
            Self::Moisture => "Moisture Content",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Self::Feed | Self::Underflow | Self::Overflow => "t/h",
            Self::FeedDilution | Self::UnderflowDilution | Self::OverflowDilution => "",
            Self::Moisture => "%",
        }
    }
}

impl Field {
    /// Returns `true` for fields that take part in the solids/water balance.
    ///
    /// Only these fields count toward the two unknowns.
    #[must_use]
    pub fn is_balanced(self) -> bool {
        self != Self::Moisture
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

/// Known and unknown values of a cyclone water balance.
///
/// `None` marks an unknown. Exactly two of the balanced fields must be
/// unknown; moisture is optional and never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaterBalanceInput {
    /// Cyclone feed solids `F`, in t/h.
    pub feed: Option<f64>,

    /// Underflow solids `U`, in t/h.
    pub underflow: Option<f64>,

    /// Overflow solids `V`, in t/h.
    pub overflow: Option<f64>,

    /// Feed dilution ratio `f` (water to solids).
    pub feed_dilution: Option<f64>,

    /// Underflow dilution ratio `u` (water to solids).
    pub underflow_dilution: Option<f64>,

    /// Overflow dilution ratio `v` (water to solids).
    pub overflow_dilution: Option<f64>,

    /// Moisture of the fresh ball mill feed `m`, in percent.
    pub moisture: Option<f64>,
}

impl WaterBalanceInput {
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
    /// Fields not named in `entries` stay unknown.
    ///
    /// # Errors
    ///
    /// Returns [`WaterBalanceError::UnknownField`] if a symbol is not one of
    /// `F`, `U`, `V`, `f`, `u`, `v` or `m`.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, WaterBalanceError>
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
            Field::Underflow => self.underflow,
            Field::Overflow => self.overflow,
            Field::FeedDilution => self.feed_dilution,
            Field::UnderflowDilution => self.underflow_dilution,
            Field::OverflowDilution => self.overflow_dilution,
            Field::Moisture => self.moisture,
        }
    }

    /// Sets or clears the value of `field`.
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Feed => &mut self.feed,
            Field::Underflow => &mut self.underflow,
            Field::Overflow => &mut self.overflow,
            Field::FeedDilution => &mut self.feed_dilution,
            Field::UnderflowDilution => &mut self.underflow_dilution,
            Field::OverflowDilution => &mut self.overflow_dilution,
            Field::Moisture => &mut self.moisture,
        };
        *slot = value;
    }

    /// Returns the balanced fields with their values, excluding moisture.
    pub fn balance_entries(&self) -> impl Iterator<Item = (Field, Option<f64>)> + '_ {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| field.is_balanced())
            .map(|field| (field, self.get(field)))
    }

    /// Returns the value of `field` if it is known, checking that it is finite.
    pub(super) fn known(&self, field: Field) -> Result<Option<f64>, WaterBalanceError> {
        self.get(field)
            .map(|value| {
                Finite::new(value)
                    .map(Constrained::into_inner)
                    .map_err(|_| WaterBalanceError::NotFinite {
                        quantity: field.symbol(),
                    })
            })
            .transpose()
    }

    /// Returns the value of a field a formula depends on.
    pub(super) fn require(&self, field: Field) -> Result<f64, WaterBalanceError> {
        self.known(field)?
            .ok_or(WaterBalanceError::InsufficientData { missing: field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        for &field in Field::ALL {
            assert_eq!(field.symbol().parse::<Field>(), Ok(field));
        }
        assert_eq!("V".parse::<Field>(), Ok(Field::Overflow));
        assert_eq!("v".parse::<Field>(), Ok(Field::OverflowDilution));
        assert!("W".parse::<Field>().is_err());
        assert_eq!(Field::Moisture.label(), "Moisture Content");
        assert_eq!(Field::UnderflowDilution.unit(), "");
    }

    #[test]
    fn balance_entries_skip_moisture() {
        let input = WaterBalanceInput::new().with(Field::Moisture, 4.0);
        let fields: Vec<_> = input.balance_entries().map(|(field, _)| field).collect();

        assert_eq!(fields.len(), 6);
        assert!(!fields.contains(&Field::Moisture));
        assert!(input.balance_entries().all(|(_, value)| value.is_none()));
    }

    #[test]
    fn from_entries() {
        let input = WaterBalanceInput::from_entries([("F", Some(100.0)), ("m", Some(20.0))]).unwrap();
        assert_eq!(input.feed, Some(100.0));
        assert_eq!(input.moisture, Some(20.0));
        assert_eq!(input.underflow, None);

        let err = WaterBalanceInput::from_entries([("T", Some(1.0))]).unwrap_err();
        assert!(matches!(err, WaterBalanceError::UnknownField(e) if e.name == "T"));
    }

    #[test]
    fn known_and_required_values_are_finite() {
        let input = WaterBalanceInput::new()
            .with(Field::Feed, 100.0)
            .with(Field::UnderflowDilution, f64::NAN)
            .with(Field::Moisture, f64::NEG_INFINITY);

        assert_eq!(input.known(Field::Feed), Ok(Some(100.0)));
        assert_eq!(input.known(Field::Overflow), Ok(None));
        assert_eq!(
            input.known(Field::Moisture),
            Err(WaterBalanceError::NotFinite { quantity: "m" })
        );
        assert_eq!(
            input.require(Field::UnderflowDilution),
            Err(WaterBalanceError::NotFinite { quantity: "u" })
        );
        assert_eq!(
            input.require(Field::Overflow),
            Err(WaterBalanceError::InsufficientData {
                missing: Field::Overflow
            })
        );
    }
}
