use super::Field;

/// A closed cyclone solids split with every balanced field known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    /// Cyclone feed solids `F`, in t/h.
    pub feed: f64,

    /// Underflow solids `U`, in t/h.
    pub underflow: f64,

    /// Overflow solids `V`, in t/h.
    pub overflow: f64,

    /// Feed dilution ratio `f`.
    pub feed_dilution: f64,

    /// Underflow dilution ratio `u`.
    pub underflow_dilution: f64,

    /// Overflow dilution ratio `v`.
    pub overflow_dilution: f64,
}

impl Balance {
    /// Returns the value of a balanced field, or `None` for moisture.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Feed => Some(self.feed),
            Field::Underflow => Some(self.underflow),
            Field::Overflow => Some(self.overflow),
            Field::FeedDilution => Some(self.feed_dilution),
            Field::UnderflowDilution => Some(self.underflow_dilution),
            Field::OverflowDilution => Some(self.overflow_dilution),
            Field::Moisture => None,
        }
    }

    /// Water carried by the cyclone feed, `F·f`.
    #[must_use]
    pub fn feed_water(&self) -> f64 {
        self.feed * self.feed_dilution
    }

    /// Water leaving with the underflow, `U·u`.
    #[must_use]
    pub fn underflow_water(&self) -> f64 {
        self.underflow * self.underflow_dilution
    }

    /// Water leaving with the overflow, `V·v`.
    #[must_use]
    pub fn overflow_water(&self) -> f64 {
        self.overflow * self.overflow_dilution
    }
}
