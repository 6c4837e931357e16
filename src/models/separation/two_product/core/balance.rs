use super::Field;

/// A closed two-product balance with every field known.
///
/// Values are kept at full precision; rounding is applied only when results
/// are reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    /// Feed solids rate `F`, in t/h.
    pub feed: f64,

    /// Concentrate solids rate `C`, in t/h.
    pub concentrate: f64,

    /// Tailings solids rate `T`, in t/h.
    pub tailings: f64,

    /// Feed grade `f`, in percent.
    pub feed_grade: f64,

    /// Concentrate grade `c`, in percent.
    pub concentrate_grade: f64,

    /// Tailings grade `t`, in percent.
    pub tailings_grade: f64,
}

impl Balance {
    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Feed => self.feed,
            Field::Concentrate => self.concentrate,
            Field::Tailings => self.tailings,
            Field::FeedGrade => self.feed_grade,
            Field::ConcentrateGrade => self.concentrate_grade,
            Field::TailingsGrade => self.tailings_grade,
        }
    }

    /// Metal units in the feed, `F·f`.
    #[must_use]
    pub fn feed_metal(&self) -> f64 {
        self.feed * self.feed_grade
    }

    /// Metal units reporting to concentrate, `C·c`.
    #[must_use]
    pub fn concentrate_metal(&self) -> f64 {
        self.concentrate * self.concentrate_grade
    }

    /// Metal units reporting to tailings, `T·t`.
    #[must_use]
    pub fn tailings_metal(&self) -> f64 {
        self.tailings * self.tailings_grade
    }
}
